mod console_appender;
mod file_appender;
mod remote_appender;

pub use console_appender::{ConsoleStream, ConsoleWriter, StdConsole};
pub use file_appender::{FileAppender, FileOpener, StdFileOpener};
pub use remote_appender::{RemoteAppender, RemotePayload, RemoteTransport, ReqwestTransport};
