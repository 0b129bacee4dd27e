use anyhow::Result;
use reversi_engine::{Analysis, Position};
use std::io::{BufRead, Write};

const HELP: &str = "Commands: n (next), p (previous), a move such as c4 to branch, quit";

/// Step through a recorded game, one command per line, until `quit` or end of input.
pub fn analyze_interactive<R: BufRead, W: Write>(
    analysis: &mut Analysis,
    input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "ANALYZE MODE!\n{}", HELP)?;
    show(analysis, &mut output)?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "quit" => break,
            "n" => match analysis.step_forward() {
                Ok(true) => {}
                Ok(false) if analysis.is_branched() => {
                    writeln!(output, "Step back to the recorded line first.")?;
                    continue;
                }
                Ok(false) => {
                    writeln!(output, "End of the record.")?;
                    continue;
                }
                Err(err) => {
                    writeln!(output, "invalid value error: {}", err)?;
                    continue;
                }
            },
            "p" => {
                if !analysis.step_back() {
                    writeln!(output, "Start of the record.")?;
                    continue;
                }
            }
            token => {
                let played = token
                    .parse::<Position>()
                    .map_err(anyhow::Error::from)
                    .and_then(|position| analysis.branch(position).map_err(anyhow::Error::from));
                if let Err(err) = played {
                    writeln!(output, "{}. {}", err, HELP)?;
                    continue;
                }
            }
        }
        show(analysis, &mut output)?;
    }
    Ok(())
}

fn show<W: Write>(analysis: &Analysis, output: &mut W) -> Result<()> {
    let line = if analysis.is_branched() {
        "side line"
    } else {
        "record"
    };
    writeln!(
        output,
        "\n{}\nmove {}/{} ({})\n",
        analysis.game(),
        analysis.cursor(),
        analysis.moves().len(),
        line
    )?;
    Ok(())
}
