//! Draws a picker into the cell buffer.

use slidepick::{Color, Picker, Rect};
use unicode_width::UnicodeWidthStr;

use crate::buffer::{Buffer, Cell};

const SELECTED: Color = Color::from_argb(0xff0288ce);
const UNSELECTED: Color = Color::from_argb(0xffbbbbbb);
const BACKGROUND: Color = Color::rgb(18, 20, 26);
const MUTED: Color = Color::rgb(110, 116, 130);

/// Width of the picker viewport in columns.
pub const PICKER_WIDTH: u16 = 28;

/// Where the picker viewport sits inside a terminal of `width` x `height`.
pub fn picker_area(width: u16, height: u16, viewport_height: f32) -> Rect {
    let w = PICKER_WIDTH.min(width) as f32;
    let h = viewport_height.min(height as f32);
    Rect::new(
        ((width as f32 - w) / 2.0).floor(),
        ((height as f32 - h) / 2.0).floor(),
        w,
        h,
    )
}

/// One rendered row: the label and its colour.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub color: Color,
    pub bold: bool,
}

/// Render an item the way the demo shows it: the selected item in the
/// accent colour, the rest faded.
pub fn label(item: &str, selected: bool) -> Label {
    Label {
        text: item.to_string(),
        color: if selected { SELECTED } else { UNSELECTED },
        bold: selected,
    }
}

/// Draw the picker inside `area`, plus a title and key hints around it.
pub fn draw(buf: &mut Buffer, picker: &Picker<&'static str>, area: Rect, status: &str) {
    fill(buf, area, BACKGROUND);

    let item_height = picker.config().item_height;
    let slot_center = picker.layout(area.width).center_slot().center_y();

    for row in picker.rows(area.width, |item, selected| label(item, selected)) {
        let Some(label) = row.content else { continue };
        // Text sits on the row's last line, leaving the first for the lines.
        let text_y = row.placement.rect.y + item_height - 1.0;
        if text_y < row.clip.y || text_y >= row.clip.bottom() {
            continue;
        }

        // Fade rows further from the centre slot.
        let distance = ((row.placement.rect.center_y() - slot_center) / item_height).abs();
        let color = if row.selected {
            label.color
        } else {
            label.color.mix(BACKGROUND, (distance / 3.0).min(0.8))
        };

        let text_rect = row.clip.center_horizontally(label.text.width() as f32);
        buf.set_str(
            (area.x + text_rect.x) as u16,
            (area.y + text_y) as u16,
            &label.text,
            color,
            label.bold,
        );
    }

    for line in picker.selection_lines(area.width) {
        let y = area.y + line.y;
        if line.y < 0.0 || line.y >= area.height {
            continue;
        }
        for x in (area.x + line.x1) as u16..(area.x + line.x2) as u16 {
            buf.set(
                x,
                y as u16,
                Cell {
                    char: '─',
                    fg: line.color,
                    bg: BACKGROUND,
                    ..Cell::default()
                },
            );
        }
    }

    let title = "slidepick";
    centered(buf, area, area.y - 2.0, title, SELECTED, true);
    centered(buf, area, area.bottom() + 1.0, status, MUTED, false);
    centered(
        buf,
        area,
        area.bottom() + 2.0,
        "drag / wheel / arrows · enter ok · esc cancel",
        MUTED,
        false,
    );
}

fn centered(buf: &mut Buffer, area: Rect, y: f32, text: &str, fg: Color, bold: bool) {
    if y < 0.0 {
        return;
    }
    let width = text.width() as f32;
    let x = (area.x + (area.width - width) / 2.0).max(0.0);
    buf.set_str(x as u16, y as u16, text, fg, bold);
}

fn fill(buf: &mut Buffer, area: Rect, bg: Color) {
    for y in area.y as u16..area.bottom() as u16 {
        for x in area.x as u16..area.right() as u16 {
            buf.set(
                x,
                y,
                Cell {
                    bg,
                    ..Cell::default()
                },
            );
        }
    }
}
