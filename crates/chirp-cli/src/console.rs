//! Line-oriented console loop
//!
//! One command per line; output for commands that produce any goes to `out`,
//! command failures go to `err` as `Error: <message>`.

use std::io::{BufRead, Write};

use chirp_core::errors::ExError;
use chirp_core_types::RequestId;
use chirp_engine::CommandRouter;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOptions {
    /// Print "> " before reading each line
    pub prompt: bool,
    /// Return the first command error instead of reporting it and moving on
    pub fail_fast: bool,
}

/// Drive `router` with every line of `input` until end of input.
///
/// A line that is not valid UTF-8 is reported like a failed command.
pub fn run<R, O, E>(
    router: &CommandRouter,
    mut input: R,
    out: &mut O,
    err: &mut E,
    options: ConsoleOptions,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    loop {
        if options.prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim_end_matches(['\r', '\n']),
            Err(e) => {
                let message = format!("line {} is not valid UTF-8: {}", line_no, e);
                if options.fail_fast {
                    return Err(message.into());
                }
                tracing::warn!(line = line_no, "undecodable input line");
                writeln!(err, "Error: {}", message)?;
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let request_id = RequestId::new();
        let span = tracing::info_span!("command", request_id = %request_id);
        let _enter = span.enter();

        match router.handle(line) {
            Ok(Some(text)) => writeln!(out, "{}", text)?,
            Ok(None) => {}
            Err(e) if options.fail_fast => return Err(e.into()),
            Err(e) => {
                let report = ExError::from(e.clone()).with_request_id(request_id.clone());
                tracing::warn!(err.code = report.code(), error = %report, "command failed");
                writeln!(err, "Error: {}", e)?;
            }
        }
    }

    if options.prompt {
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
