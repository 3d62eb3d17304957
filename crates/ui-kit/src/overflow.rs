//! Collapsing long sequences into a bounded number of visible slots.

/// One visible position in a truncated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A real item, by index into the original sequence.
    Item(usize),
    /// A non-interactive placeholder standing for the hidden run.
    Ellipsis,
}

impl Slot {
    pub fn index(&self) -> Option<usize> {
        match self {
            Slot::Item(i) => Some(*i),
            Slot::Ellipsis => None,
        }
    }
}

/// Smallest visible count that can still hold first, placeholder and last.
pub const MIN_VISIBLE: usize = 3;

/// Truncate `len` items down to `max_visible` slots.
///
/// The first and last items are always kept and the hidden run becomes a
/// single [`Slot::Ellipsis`]. `active` defaults to the last item. When the
/// active item falls outside both the head and tail runs it is shown with a
/// placeholder on either side, so it is never hidden.
///
/// That middle layout needs first, two placeholders, the active item and
/// last, so with an active item in the middle and `max_visible` below 5 the
/// result is 5 slots, more than asked for. Every other case returns at most
/// `max_visible` slots.
pub fn truncate(len: usize, max_visible: usize, active: Option<usize>) -> Vec<Slot> {
    let max = max_visible.max(MIN_VISIBLE);
    if len <= max {
        return (0..len).map(Slot::Item).collect();
    }

    let last = len - 1;
    let run = max - 2;
    let tail_start = len - run;
    let active = active.unwrap_or(last).min(last);

    if active == 0 || active >= tail_start {
        let mut slots = vec![Slot::Item(0), Slot::Ellipsis];
        slots.extend((tail_start..len).map(Slot::Item));
        return slots;
    }

    if active < run {
        let mut slots: Vec<Slot> = (0..run).map(Slot::Item).collect();
        slots.push(Slot::Ellipsis);
        slots.push(Slot::Item(last));
        return slots;
    }

    let window = max.saturating_sub(4).max(1);
    let start = active + 1 - window;
    let mut indices = vec![0];
    indices.extend(start..=active);
    indices.push(last);
    with_gaps(&indices, false)
}

/// Page slots for a pager: first, last, and `siblings` pages either side of
/// `current` (0-based). A gap of a single page shows that page instead of a
/// placeholder.
pub fn page_window(total_pages: usize, current: usize, siblings: usize) -> Vec<Slot> {
    if total_pages == 0 {
        return Vec::new();
    }
    let last = total_pages - 1;
    let current = current.min(last);
    let mut indices = vec![0, last];
    indices.extend(current.saturating_sub(siblings)..=(current + siblings).min(last));
    indices.sort_unstable();
    indices.dedup();
    with_gaps(&indices, true)
}

fn with_gaps(sorted: &[usize], fill_single: bool) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(sorted.len() * 2);
    let mut prev: Option<usize> = None;
    for &index in sorted {
        if let Some(p) = prev {
            match index - p {
                1 => {}
                2 if fill_single => slots.push(Slot::Item(p + 1)),
                _ => slots.push(Slot::Ellipsis),
            }
        }
        slots.push(Slot::Item(index));
        prev = Some(index);
    }
    slots
}
