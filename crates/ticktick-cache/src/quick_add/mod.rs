//! Quick-add: turn one line of free text into a task.
//!
//! ```text
//! Call the dentist tomorrow at 10am #health ~personal
//! └──── title ───┘ └── date ──────┘ └ tag ┘ └project┘
//! ```

mod dates;
mod normalize;
mod parser;

pub use dates::{extract_dates, ParsedDates};
pub use normalize::{fold, suggest};
pub use parser::{match_project, parse_draft, parse_task_input, resolve_project, Draft};

#[cfg(test)]
mod tests;
