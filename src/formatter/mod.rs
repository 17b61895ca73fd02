mod message_formatter;
mod printf;

pub use message_formatter::{FormattedMessage, FormattedPieces, MessageFormatter};
pub use printf::{sprintf, FormatArg};
