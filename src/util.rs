use colored::Colorize;

pub enum LogType {
    Info,
    Remote,
    Warning,
    Error,
}

// Info and Remote are progress lines on stdout, Warning and
// Error are diagnostics on stderr.
pub fn log(msg: String, log_type: LogType) {
    match log_type {
        LogType::Info => println!("{} {msg}", "[LOG]".white().bold()),
        LogType::Remote => println!("{} {msg}", "[REMOTE]".cyan().bold()),
        LogType::Warning => eprintln!("{} {msg}", "[REMOTE]".yellow().bold()),
        LogType::Error => eprintln!("{} {msg}", "[ERROR]".red().bold()),
    }
}
