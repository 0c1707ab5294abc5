//! Slide navigation controller.
//!
//! [`Navigator`] is the state machine that runs inside every rendered deck.
//! It is modelled here so its behavior can be checked directly, and
//! [`controller_script`] serializes the same machine as the script embedded
//! in the document. Both sides share the element ids and key bindings below.

/// Element id of the live position readout.
pub const READOUT_ID: &str = "current-slide";
/// Element id of the total slide count.
pub const TOTAL_ID: &str = "total-slides";
/// Element id of the "previous" control.
pub const PREV_ID: &str = "prev-btn";
/// Element id of the "next" control.
pub const NEXT_ID: &str = "next-btn";
/// Class carried by every slide element.
pub const SLIDE_CLASS: &str = "slide-container";
/// Class marking the visible slide.
pub const ACTIVE_CLASS: &str = "active";

/// Direction of a single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Signed step applied to the current position.
    pub fn step(self) -> i64 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }

    /// Direction bound to a keyboard key, if any.
    pub fn from_key(key: &str) -> Option<Self> {
        KEY_BINDINGS
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|&(_, direction)| direction)
    }
}

/// Keyboard keys that move the deck.
pub const KEY_BINDINGS: &[(&str, Direction)] = &[
    ("ArrowLeft", Direction::Previous),
    ("ArrowRight", Direction::Next),
];

/// Position state of one displayed deck.
///
/// `current` always stays within `0..total` (or at 0 for an empty deck).
/// Moving past either end is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    total: usize,
}

impl Navigator {
    /// Controller for a deck of `total` slides, showing the first one.
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    /// Move one step, clamped to the deck bounds.
    ///
    /// Returns whether the position changed.
    pub fn advance(&mut self, direction: Direction) -> bool {
        let previous = self.current;
        self.current = match direction {
            Direction::Previous => self.current.saturating_sub(1),
            Direction::Next => (self.current + 1).min(self.last()),
        };
        self.current != previous
    }

    /// Index of the visible slide.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides in the deck.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether the slide at `index` is the visible one.
    pub fn is_visible(&self, index: usize) -> bool {
        index == self.current && index < self.total
    }

    /// 1-based position shown in the readout, 0 for an empty deck.
    pub fn readout(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.current + 1
        }
    }

    /// Whether the "previous" control is disabled.
    pub fn previous_disabled(&self) -> bool {
        self.current == 0
    }

    /// Whether the "next" control is disabled.
    pub fn next_disabled(&self) -> bool {
        self.current == self.last()
    }

    fn last(&self) -> usize {
        self.total.saturating_sub(1)
    }
}

// Script counterparts of the `Navigator` rules. They read the script's
// `total`, `last`, `current` and `direction` variables.
const SCRIPT_LAST: &str = "Math.max(total - 1, 0)";
const SCRIPT_ADVANCE: &str = "Math.min(Math.max(current + direction, 0), last)";
const SCRIPT_READOUT: &str = "total === 0 ? 0 : current + 1";
const SCRIPT_PREV_DISABLED: &str = "current === 0";
const SCRIPT_NEXT_DISABLED: &str = "current === last";

/// Script text implementing [`Navigator`] for a deck of `total` slides.
///
/// The script expects the slide elements, readout and controls to exist when
/// it runs, so it is placed at the end of the document body.
pub fn controller_script(total: usize) -> String {
    let keys = KEY_BINDINGS
        .iter()
        .map(|(key, direction)| format!("'{}': {}", key, direction.step()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"(function () {{
    var total = {total};
    var last = {last};
    var current = 0;
    var slides = document.querySelectorAll('.{slide_class}');
    var readout = document.getElementById('{readout_id}');
    var prev = document.getElementById('{prev_id}');
    var next = document.getElementById('{next_id}');
    var keys = {{{keys}}};

    function show() {{
        for (var i = 0; i < slides.length; i++) {{
            slides[i].classList.toggle('{active_class}', i === current);
        }}
        readout.textContent = String({readout});
        prev.disabled = {prev_disabled};
        next.disabled = {next_disabled};
    }}

    function advance(direction) {{
        current = {advance};
        show();
    }}

    prev.addEventListener('click', function () {{ advance(-1); }});
    next.addEventListener('click', function () {{ advance(1); }});
    document.addEventListener('keydown', function (event) {{
        if (Object.prototype.hasOwnProperty.call(keys, event.key)) {{
            advance(keys[event.key]);
        }}
    }});

    show();
}})();
"#,
        total = total,
        slide_class = SLIDE_CLASS,
        readout_id = READOUT_ID,
        prev_id = PREV_ID,
        next_id = NEXT_ID,
        active_class = ACTIVE_CLASS,
        keys = keys,
        last = SCRIPT_LAST,
        advance = SCRIPT_ADVANCE,
        readout = SCRIPT_READOUT,
        prev_disabled = SCRIPT_PREV_DISABLED,
        next_disabled = SCRIPT_NEXT_DISABLED,
    )
}
