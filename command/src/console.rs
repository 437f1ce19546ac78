use std::fmt;

/// Line one line of report output. Headings and labels get highlighted on a terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Heading(String),
    Label { label: String, value: String },
    Plain(String),
}

impl Line {
    pub fn heading<S: Into<String>>(text: S) -> Line {
        Line::Heading(text.into())
    }

    pub fn label<L: Into<String>, V: ToString>(label: L, value: V) -> Line {
        Line::Label {
            label: label.into(),
            value: value.to_string(),
        }
    }

    pub fn plain<S: Into<String>>(text: S) -> Line {
        Line::Plain(text.into())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Heading(text) | Line::Plain(text) => write!(f, "{}", text),
            Line::Label { label, value } => write!(f, "{} {}", label, value),
        }
    }
}

/// Console where the plugin writes what the user reads
pub trait Console {
    fn console_log(&self, lines: &[Line]);
}

impl<C: Console + ?Sized> Console for &C {
    fn console_log(&self, lines: &[Line]) {
        (**self).console_log(lines)
    }
}

/// TerminalConsole prints to stdout, highlighting in yellow unless colour is off
pub struct TerminalConsole {
    colour: bool,
}

impl TerminalConsole {
    pub fn new(colour: bool) -> TerminalConsole {
        TerminalConsole { colour }
    }
}

impl Console for TerminalConsole {
    fn console_log(&self, lines: &[Line]) {
        for line in lines {
            if !self.colour {
                println!("{}", line);
                continue;
            }
            match line {
                Line::Heading(text) => {
                    colour::yellow_ln!("{}", text);
                }
                Line::Label { label, value } => {
                    colour::yellow!("{}", label);
                    println!(" {}", value);
                }
                Line::Plain(text) => println!("{}", text),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Line;

    #[test]
    fn test_line_display() {
        assert_eq!(Line::heading("functions:").to_string(), "functions:");
        assert_eq!(Line::label("service:", "svc").to_string(), "service: svc");
        assert_eq!(Line::label("Current Version:", 3).to_string(), "Current Version: 3");
        assert_eq!(Line::plain("    id: 1").to_string(), "    id: 1");
    }
}
