//! Where reports are written.

/// Which stream a rendered line belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Target output for reports.
///
/// Implementations only decide where a finished line goes; the line shapes
/// are shared by the provided methods.
pub trait Output {
    fn emit(&mut self, stream: Stream, line: String);

    fn section(&mut self, name: &str) {
        self.emit(Stream::Stdout, format!("{name}:"));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.emit(Stream::Stdout, format!("{key}: {value}"));
    }

    fn list_item(&mut self, text: &str) {
        self.emit(Stream::Stdout, format!("  - {text}"));
    }

    /// A file that was written.
    fn added_item(&mut self, text: &str) {
        self.emit(Stream::Stdout, format!("  + {text}"));
    }

    /// A file that already existed and was left alone.
    fn kept_item(&mut self, text: &str) {
        self.emit(Stream::Stdout, format!("  = {text}"));
    }

    fn error(&mut self, msg: &str) {
        self.emit(Stream::Stderr, format!("error: {msg}"));
    }

    fn warning(&mut self, msg: &str) {
        self.emit(Stream::Stderr, format!("warning: {msg}"));
    }

    fn info(&mut self, msg: &str) {
        self.emit(Stream::Stdout, format!("info: {msg}"));
    }

    /// Heading line in front of a previewed file.
    fn divider(&mut self, label: &str) {
        self.emit(Stream::Stdout, format!("── {label} ──"));
    }

    fn preformatted(&mut self, text: &str) {
        self.emit(Stream::Stdout, text.to_string());
    }

    fn newline(&mut self) {
        self.emit(Stream::Stdout, String::new());
    }
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to the process's stdout and stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl Output for TerminalOutput {
    fn emit(&mut self, stream: Stream, line: String) {
        match stream {
            Stream::Stdout => println!("{line}"),
            Stream::Stderr => eprintln!("{line}"),
        }
    }
}

/// Collects rendered lines in memory, whatever their stream.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn emit(&mut self, _stream: Stream, line: String) {
        self.lines.push(line);
    }
}
