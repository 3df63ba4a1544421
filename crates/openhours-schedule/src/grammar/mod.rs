//! Opening-hours specification grammar.
//!
//! ```text
//! spec        := rule (";" rule)* [";"]
//! rule        := dayfield WS timefield
//! dayfield    := dayitem ("," dayitem)*
//! dayitem     := DAY | DAY "-" DAY
//! timefield   := timerange ("," timerange)*
//! timerange   := TIME "-" TIME
//! TIME        := HH ":" MM [":" SS]
//! ```
//!
//! The grammar is error tolerant. Decoders report problems as values and the
//! expanders decide what to do with them: day items that do not decode are
//! dropped, time tokens that do not decode become midnight. Everything that
//! was dropped or zeroed is recorded in a [`Diagnostics`] sink.

mod error;
mod expand;
mod normalize;
mod values;


pub use error::{Diagnostics, ParseError, ParseErrorKind, ParseResult};
pub use expand::{TimeRange, expand_days, expand_time_field, expand_time_range};
pub use normalize::normalize;
pub use values::{decode_time_of_day, decode_weekday};
