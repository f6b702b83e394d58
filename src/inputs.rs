/// ----- INPUTS MODULE -----
/// Reads hall calls typed on standard input, one per line: `3 up`, `2 d`,
/// and `q` to quit. The reader thread drops its channel at end of input.

use std::io::{self, BufRead};
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::warn;

use shared_resources::request::Request;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Call(Request),
    Quit,
}

/// None for blank or malformed lines.
pub fn parse_line(line: &str) -> Option<Input> {
    let mut words = line.split_whitespace();
    let first = words.next()?;
    if matches!(first, "q" | "quit") {
        return Some(Input::Quit);
    }
    let parsed = match (first.parse::<u8>(), words.next(), words.next()) {
        (Ok(floor), Some("up" | "u"), None) => Some(Request::up(floor)),
        (Ok(floor), Some("down" | "d"), None) => Some(Request::down(floor)),
        _ => None,
    };
    if parsed.is_none() {
        warn!("could not read {:?}, expected e.g. \"3 up\" or \"2 down\"", line.trim());
    }
    parsed.map(Input::Call)
}

pub fn init() -> io::Result<Receiver<Input>> {
    let (input_tx, input_rx) = unbounded();
    thread::Builder::new()
        .name(String::from("inputs"))
        .spawn(move || read_inputs(io::stdin().lock(), input_tx))?;
    Ok(input_rx)
}

fn read_inputs<R: BufRead>(reader: R, input_tx: Sender<Input>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("stopped reading input: {}", err);
                return;
            }
        };
        if let Some(input) = parse_line(&line) {
            if input_tx.send(input).is_err() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn calls_accept_long_and_short_directions() {
        assert_eq!(parse_line("3 up"), Some(Input::Call(Request::up(3))));
        assert_eq!(parse_line("  2   d "), Some(Input::Call(Request::down(2))));
        assert_eq!(parse_line("0 u"), Some(Input::Call(Request::up(0))));
        assert_eq!(parse_line("7 down"), Some(Input::Call(Request::down(7))));
    }

    #[test]
    fn quit_and_garbage() {
        assert_eq!(parse_line("q"), Some(Input::Quit));
        assert_eq!(parse_line("quit"), Some(Input::Quit));
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("up 3"), None);
        assert_eq!(parse_line("3 sideways"), None);
        assert_eq!(parse_line("3 up now"), None);
        assert_eq!(parse_line("-1 up"), None);
    }

    #[test]
    fn reader_forwards_parsed_lines_and_closes_at_the_end() {
        let (input_tx, input_rx) = unbounded();
        read_inputs(Cursor::new("4 down\nnonsense\n\n1 u\nq\n"), input_tx);

        let inputs: Vec<Input> = input_rx.iter().collect();
        assert_eq!(
            inputs,
            vec![
                Input::Call(Request::down(4)),
                Input::Call(Request::up(1)),
                Input::Quit,
            ]
        );
    }
}
