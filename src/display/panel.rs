// Control panel - labels, disabled state, focus and mouse hit testing
//
// Drawing and hit testing share the same segment list, so a click lands on
// exactly the text it was drawn as.

use crate::action::Action;
use crate::config::{Field, MasonryConfig};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    ShowNumbers,
    Loop,
    Stepper(Field),
    Randomize,
    Regenerate,
    Reset,
}

impl Control {
    /// Focus order, top to bottom
    pub const ALL: [Control; 11] = [
        Control::ShowNumbers,
        Control::Loop,
        Control::Stepper(Field::MinValue),
        Control::Stepper(Field::Gap),
        Control::Stepper(Field::TileRadius),
        Control::Stepper(Field::Repeat),
        Control::Stepper(Field::RowSpan),
        Control::Stepper(Field::ColumnSpan),
        Control::Randomize,
        Control::Regenerate,
        Control::Reset,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Control::ShowNumbers => "Show numbers",
            Control::Loop => "Loop",
            Control::Stepper(field) => field.label(),
            Control::Randomize => "Randomize",
            Control::Regenerate => "Regenerate",
            Control::Reset => "Reset",
        }
    }

    pub fn is_enabled(&self, config: &MasonryConfig) -> bool {
        matches!(self, Control::Loop) || !config.looping
    }

    /// Space/Enter on the control; steppers step up
    pub fn activate(&self) -> Action {
        match self {
            Control::ShowNumbers => Action::ToggleShowNumbers,
            Control::Loop => Action::ToggleLoop,
            Control::Stepper(field) => Action::Increment(*field),
            Control::Randomize => Action::Randomize,
            Control::Regenerate => Action::Regenerate,
            Control::Reset => Action::Reset,
        }
    }

    pub fn for_action(action: Action) -> Self {
        match action {
            Action::ToggleShowNumbers => Control::ShowNumbers,
            Action::ToggleLoop => Control::Loop,
            Action::Increment(field) | Action::Decrement(field) => Control::Stepper(field),
            Action::Randomize => Control::Randomize,
            Action::Regenerate => Control::Regenerate,
            Action::Reset => Control::Reset,
        }
    }

    pub fn step(&self, up: bool) -> Option<Action> {
        match self {
            Control::Stepper(field) if up => Some(Action::Increment(*field)),
            Control::Stepper(field) => Some(Action::Decrement(*field)),
            _ => None,
        }
    }
}

/// A run of text on one panel line, optionally clickable
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub control: Option<Control>,
    pub action: Option<Action>,
}

impl Segment {
    fn plain(text: impl Into<String>, control: Option<Control>) -> Self {
        Self {
            text: text.into(),
            control,
            action: None,
        }
    }

    fn clickable(text: impl Into<String>, control: Control, action: Action) -> Self {
        Self {
            text: text.into(),
            control: Some(control),
            action: Some(action),
        }
    }

    pub fn width(&self) -> u16 {
        self.text.chars().count() as u16
    }
}

fn checkbox(checked: bool, control: Control, action: Action) -> Segment {
    let mark = if checked { "[x]" } else { "[ ]" };
    Segment::clickable(format!("{} {}", control.label(), mark), control, action)
}

/// Panel content as segment lines, in display order
pub fn panel_segments(config: &MasonryConfig) -> Vec<Vec<Segment>> {
    let mut lines = Vec::with_capacity(Field::ALL.len() + 2);

    lines.push(vec![
        checkbox(config.show_numbers, Control::ShowNumbers, Action::ToggleShowNumbers),
        Segment::plain("   ", None),
        checkbox(config.looping, Control::Loop, Action::ToggleLoop),
    ]);

    for field in Field::ALL {
        let control = Control::Stepper(field);
        lines.push(vec![
            Segment::clickable("[-]", control, Action::Decrement(field)),
            Segment::plain(
                format!(" {} {} ", field.label(), config.value(field)),
                Some(control),
            ),
            Segment::clickable("[+]", control, Action::Increment(field)),
        ]);
    }

    lines.push(vec![
        Segment::clickable("[Randomize]", Control::Randomize, Action::Randomize),
        Segment::plain(" ", None),
        Segment::clickable("[Regenerate]", Control::Regenerate, Action::Regenerate),
        Segment::plain(" ", None),
        Segment::clickable("[Reset]", Control::Reset, Action::Reset),
    ]);

    lines
}

pub fn panel_block(looping: bool) -> Block<'static> {
    let title = if looping { " Controls (looping) " } else { " Controls " };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .padding(Padding::horizontal(1))
        .title(title)
}

/// Outer size of the panel including border and padding
pub fn panel_size(config: &MasonryConfig) -> (u16, u16) {
    let lines = panel_segments(config);
    let width = lines
        .iter()
        .map(|line| line.iter().map(Segment::width).sum::<u16>())
        .max()
        .unwrap_or(0);
    (width + 4, lines.len() as u16 + 2)
}

/// Styled lines for drawing; disabled controls are dimmed, focus is reversed
pub fn panel_lines(config: &MasonryConfig, focused: Option<Control>) -> Vec<Line<'static>> {
    panel_segments(config)
        .into_iter()
        .map(|segments| {
            let spans: Vec<Span> = segments
                .into_iter()
                .map(|segment| {
                    let mut style = Style::default();
                    if let Some(control) = segment.control {
                        if !control.is_enabled(config) {
                            style = style.fg(Color::DarkGray);
                        } else if segment.action.is_some() {
                            style = style.fg(Color::Cyan);
                        }
                        if focused == Some(control) {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                    }
                    Span::styled(segment.text, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Action of the clickable segment under `position`, if any
pub fn hit_test(area: Rect, config: &MasonryConfig, position: Position) -> Option<Action> {
    let inner = panel_block(config.looping).inner(area);
    if !inner.contains(position) {
        return None;
    }
    let lines = panel_segments(config);
    let line = lines.get((position.y - inner.y) as usize)?;
    let mut x = inner.x;
    for segment in line {
        let end = x + segment.width();
        if position.x >= x && position.x < end {
            return segment.action;
        }
        x = end;
    }
    None
}
