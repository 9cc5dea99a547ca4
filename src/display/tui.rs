// Terminal drawing - masonry grid, control panel, help and activity log

use crate::app::{App, LogLevel};
use crate::config::{AppConfig, DisplayConfig};
use crate::display::panel::{panel_block, panel_lines, panel_size};
use crate::grid::{PlacedTile, Tile};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget, Wrap};
use ratatui::Frame;
use rand::Rng;

const LOG_HEIGHT: u16 = 8;

/// Rounds a pixel length to whole terminal cells
pub fn px_to_cells(px: u32, px_per_cell: u32) -> u16 {
    let scale = px_per_cell.max(1);
    ((px + scale / 2) / scale).min(u16::MAX as u32) as u16
}

/// Vertical pitch of the grid: one row of tiles plus the row gap
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowMetrics {
    pub height: u16,
    pub gap: u16,
}

impl RowMetrics {
    pub fn new(display: &DisplayConfig, gap_px: u32) -> Self {
        Self {
            height: display.tile_height.max(1),
            gap: px_to_cells(gap_px, display.px_per_row),
        }
    }

    fn pitch(&self) -> i64 {
        self.height as i64 + self.gap as i64
    }
}

/// Column tracks of equal width separated by the column gap
pub fn column_tracks(area: Rect, columns: u32, gap: u16) -> Vec<Rect> {
    let count = columns.max(1) as usize;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count as u32); count])
        .spacing(gap)
        .split(area)
        .to_vec()
}

/// Screen rectangle of a placed tile, clipped to `area`; `None` when off screen
pub fn tile_rect(
    area: Rect,
    tracks: &[Rect],
    placed: &PlacedTile,
    rows: RowMetrics,
    scroll: u32,
) -> Option<Rect> {
    let first = tracks.get(placed.column as usize)?;
    let last = tracks.get((placed.column + placed.column_span - 1) as usize)?;

    let top = area.y as i64 + (placed.row as i64 - scroll as i64) * rows.pitch();
    let height = placed.row_span as i64 * rows.pitch() - rows.gap as i64;
    let bottom = top + height;

    let clipped_top = top.max(area.y as i64);
    let clipped_bottom = bottom.min(area.bottom() as i64);
    if clipped_bottom <= clipped_top || first.width == 0 {
        return None;
    }

    Some(Rect {
        x: first.x,
        y: clipped_top as u16,
        width: last.right().saturating_sub(first.x),
        height: (clipped_bottom - clipped_top) as u16,
    })
}

/// A tile drawn as a block of its background colour
pub struct TileWidget<'a> {
    pub tile: &'a Tile,
}

impl Widget for TileWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let color = self.tile.color;
        let bg = Color::Rgb(color.0, color.1, color.2);
        let fg = if color.luma() > 140 {
            Color::Black
        } else {
            Color::White
        };
        buf.set_style(area, Style::default().bg(bg).fg(fg));

        if self.tile.radius.is_some() && area.width >= 2 && area.height >= 2 {
            let corners = [
                (area.left(), area.top(), "▗"),
                (area.right() - 1, area.top(), "▖"),
                (area.left(), area.bottom() - 1, "▝"),
                (area.right() - 1, area.bottom() - 1, "▘"),
            ];
            for (x, y, symbol) in corners {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(symbol)
                        .set_style(Style::default().fg(bg).bg(Color::Reset));
                }
            }
        }

        let text = self.tile.text();
        if !text.is_empty() {
            let width = (text.chars().count() as u16).min(area.width);
            let x = area.x + (area.width - width) / 2;
            let y = area.y + area.height / 2;
            buf.set_stringn(x, y, text, width as usize, Style::default().bg(bg).fg(fg));
        }
    }
}

/// Bottom-right rectangle for the control panel
pub fn panel_area<R: Rng>(frame_area: Rect, app: &App<R>) -> Rect {
    let (width, height) = panel_size(app.config());
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);
    Rect {
        x: frame_area.right().saturating_sub(width + 1).max(frame_area.x),
        y: frame_area.bottom().saturating_sub(height + 1).max(frame_area.y),
        width,
        height,
    }
}

pub fn render_main_ui<R: Rng>(f: &mut Frame, app: &App<R>, settings: &AppConfig) {
    let area = f.area();
    let chunks = if app.show_log {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(LOG_HEIGHT)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3)])
            .split(area)
    };

    render_masonry(f, chunks[0], app, &settings.display);
    if app.show_log {
        render_logs(f, chunks[1], app);
    }
    if app.show_panel {
        render_panel(f, panel_area(area, app), app);
    }
    if app.show_help {
        render_help(f);
    }
}

fn render_masonry<R: Rng>(f: &mut Frame, area: Rect, app: &App<R>, display: &DisplayConfig) {
    let render = app.current_render();
    let placement = app.placement();
    let title = format!(
        " Masonry: {} blocks, {} columns{} ",
        render.tiles.len(),
        render.template.columns,
        if app.config().looping { ", looping" } else { "" }
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let gap_px = render.template.gap_px();
    let tracks = column_tracks(
        inner,
        render.template.columns,
        px_to_cells(gap_px, display.px_per_column),
    );
    let rows = RowMetrics::new(display, gap_px);

    for placed in &placement.tiles {
        let Some(tile) = render.tiles.get(placed.index as usize) else {
            continue;
        };
        if let Some(rect) = tile_rect(inner, &tracks, placed, rows, app.scroll) {
            f.render_widget(TileWidget { tile }, rect);
        }
    }
}

fn render_panel<R: Rng>(f: &mut Frame, area: Rect, app: &App<R>) {
    let config = app.config();
    let border = if config.looping {
        Color::Yellow
    } else {
        Color::White
    };
    let panel = Paragraph::new(panel_lines(config, Some(app.focused_control())))
        .block(panel_block(config.looping).border_style(Style::default().fg(border)));
    f.render_widget(Clear, area);
    f.render_widget(panel, area);
}

fn render_logs<R: Rng>(f: &mut Frame, area: Rect, app: &App<R>) {
    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .logs()
        .iter()
        .rev()
        .take(visible)
        .rev()
        .map(|entry| {
            let color = match entry.level {
                LogLevel::Action => Color::Green,
                LogLevel::Ignored => Color::DarkGray,
                LogLevel::Tick => Color::Magenta,
                LogLevel::Info => Color::Cyan,
            };
            let time_str = format!("{:>6.1}s", entry.timestamp.elapsed().as_secs_f32());
            ListItem::new(Line::from(vec![
                Span::styled(time_str, Style::default().fg(Color::DarkGray)),
                Span::raw(" "),
                Span::styled(entry.message.clone(), Style::default().fg(color)),
            ]))
        })
        .collect();

    let title = format!(" Activity ({} renders) ", app.render_count());
    let logs_widget = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(logs_widget, area);
}

fn render_help(f: &mut Frame) {
    let help_text = vec![
        Line::from(Span::styled(
            "Masonry - Help",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  Tab / Down / j    - Next control"),
        Line::from("  S-Tab / Up / k    - Previous control"),
        Line::from("  Left / -          - Decrease focused value"),
        Line::from("  Right / + / =     - Increase focused value"),
        Line::from("  Space / Enter     - Activate focused control"),
        Line::from(""),
        Line::from("  n  Show numbers     l  Loop"),
        Line::from("  r  Randomize        g  Regenerate"),
        Line::from("  0  Reset            p  Hide/show panel"),
        Line::from("  e  Activity log     PgUp/PgDn  Scroll"),
        Line::from("  h / ?  Help         q / Esc    Quit"),
        Line::from(""),
        Line::from("Mouse: click any panel control, wheel scrolls the grid."),
        Line::from("While looping only the Loop control responds."),
    ];

    let popup_area = centered_rect(60, 70, f.area());
    let help_widget = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: false });
    f.render_widget(Clear, popup_area);
    f.render_widget(help_widget, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_to_cells_rounds() {
        assert_eq!(px_to_cells(0, 8), 0);
        assert_eq!(px_to_cells(3, 8), 0);
        assert_eq!(px_to_cells(4, 8), 1);
        assert_eq!(px_to_cells(20, 8), 3);
    }

    #[test]
    fn test_column_tracks_equal_width() {
        let tracks = column_tracks(Rect::new(0, 0, 120, 10), 12, 0);
        assert_eq!(tracks.len(), 12);
        assert!(tracks.iter().all(|t| t.width == 10));
    }

    #[test]
    fn test_tile_rect_spans_and_clips() {
        let area = Rect::new(0, 0, 40, 10);
        let tracks = column_tracks(area, 4, 0);
        let rows = RowMetrics { height: 3, gap: 1 };
        let placed = PlacedTile {
            index: 0,
            row: 1,
            column: 1,
            row_span: 2,
            column_span: 2,
        };
        let rect = tile_rect(area, &tracks, &placed, rows, 0).unwrap();
        assert_eq!(rect, Rect::new(10, 4, 20, 6));

        // scrolled by one row the tile starts at the top
        let rect = tile_rect(area, &tracks, &placed, rows, 1).unwrap();
        assert_eq!(rect.y, 0);

        // scrolled past its last row it disappears
        assert!(tile_rect(area, &tracks, &placed, rows, 3).is_none());
    }
}
