use super::Rect;

/// What a laid-out row holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Blank row above the first or below the last item.
    Padding,
    /// Row showing the item at this index.
    Item(usize),
}

/// Position of one row of the stack in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPlacement {
    /// Row number in the stack, counting the leading padding row as 0.
    pub row: usize,
    pub kind: RowKind,
    pub rect: Rect,
}

impl RowPlacement {
    pub fn item_index(&self) -> Option<usize> {
        match self.kind {
            RowKind::Item(index) => Some(index),
            RowKind::Padding => None,
        }
    }
}

/// Placement of every row of the picker stack inside its viewport.
///
/// Rows are stacked top to bottom. The stack is first centred on the
/// viewport (as a host centres content taller than its box), then moved by
/// a static shift of `stack_height / 2 - round(item_height * 1.5)` which
/// brings the first item into the centre slot, then by half a row up when
/// the visible count is even, and finally by the snap offset.
#[derive(Debug, Clone, PartialEq)]
pub struct StackLayout {
    viewport: Rect,
    item_height: f32,
    visible_count: usize,
    stack_height: f32,
    origin: f32,
    static_shift: f32,
    even_correction: f32,
    offset: f32,
    rows: Vec<RowPlacement>,
}

impl StackLayout {
    /// Lay out rows with the given heights. The first and last rows are the
    /// padding rows; every row between them is an item.
    pub fn measure(
        row_heights: &[f32],
        item_height: f32,
        visible_count: usize,
        viewport_width: f32,
        offset: f32,
    ) -> Self {
        let viewport = Rect::from_size(viewport_width, item_height * visible_count as f32);
        let stack_height: f32 = row_heights.iter().sum();
        let origin = (viewport.height - stack_height) / 2.0;
        let static_shift = stack_height / 2.0 - (item_height * 1.5).round();
        let even_correction = if visible_count % 2 == 0 {
            item_height / 2.0
        } else {
            0.0
        };

        let top = origin + static_shift - even_correction + offset;
        let last = row_heights.len().saturating_sub(1);
        let mut y = 0.0;
        let rows = row_heights
            .iter()
            .enumerate()
            .map(|(row, &height)| {
                let kind = if row == 0 || row == last {
                    RowKind::Padding
                } else {
                    RowKind::Item(row - 1)
                };
                let placement = RowPlacement {
                    row,
                    kind,
                    rect: Rect::new(0.0, top + y, viewport_width, height),
                };
                y += height;
                placement
            })
            .collect();

        Self {
            viewport,
            item_height,
            visible_count,
            stack_height,
            origin,
            static_shift,
            even_correction,
            offset,
            rows,
        }
    }

    /// Lay out `item_count` rows of `item_height` plus the two padding rows.
    pub fn for_items(
        item_count: usize,
        item_height: f32,
        visible_count: usize,
        viewport_width: f32,
        offset: f32,
    ) -> Self {
        let heights = vec![item_height; item_count + 2];
        Self::measure(&heights, item_height, visible_count, viewport_width, offset)
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Total height of all rows, padding included.
    pub fn stack_height(&self) -> f32 {
        self.stack_height
    }

    /// Top of the unshifted stack after centring it on the viewport.
    pub fn origin(&self) -> f32 {
        self.origin
    }

    pub fn static_shift(&self) -> f32 {
        self.static_shift
    }

    pub fn even_correction(&self) -> f32 {
        self.even_correction
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Every row, visible or not, in stack order.
    pub fn rows(&self) -> &[RowPlacement] {
        &self.rows
    }

    /// The slot framed by the selection lines.
    pub fn center_slot(&self) -> Rect {
        let slot = (self.visible_count.saturating_sub(1) / 2) as f32;
        Rect::new(
            0.0,
            self.item_height * slot,
            self.viewport.width,
            self.item_height,
        )
    }

    /// Rows that intersect the viewport, paired with their clipped rect.
    pub fn visible_rows(&self) -> impl Iterator<Item = (&RowPlacement, Rect)> + '_ {
        self.rows.iter().filter_map(|placement| {
            placement
                .rect
                .intersection(&self.viewport)
                .map(|clipped| (placement, clipped))
        })
    }

    /// Row whose rect contains the viewport y coordinate.
    pub fn row_at(&self, y: f32) -> Option<&RowPlacement> {
        self.rows
            .iter()
            .find(|placement| y >= placement.rect.y && y < placement.rect.bottom())
    }

    /// Item row currently overlapping the centre slot the most.
    pub fn centered_item(&self) -> Option<usize> {
        self.row_at(self.center_slot().center_y())
            .and_then(RowPlacement::item_index)
    }
}
