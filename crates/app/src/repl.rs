//! Line-oriented driver for a `Session`.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use shopcart_catalog::CatalogSource;
use shopcart_display::LOADING_MESSAGE;

use crate::session::{Outcome, Session, SessionCommand};

/// Show the loading screen, then fetch the catalog and open a session over it.
pub async fn load<W>(source: &dyn CatalogSource, output: &mut W) -> anyhow::Result<Session>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(format!("{LOADING_MESSAGE}\n").as_bytes()).await?;
    output.flush().await?;
    Ok(Session::start(source).await)
}

/// Render the initial screen, then execute one command per input line until
/// `quit` or end of input.
///
/// Command errors are reported on `output` and the session carries on; only IO
/// failures end the loop early.
pub async fn run<R, W>(session: &mut Session, input: R, mut output: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(session.render().as_bytes()).await?;
    output.flush().await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line
            .parse::<SessionCommand>()
            .and_then(|command| session.execute(command))
        {
            Ok(Outcome::Render(text)) => output.write_all(text.as_bytes()).await?,
            Ok(Outcome::Quit) => break,
            Err(err) => {
                tracing::warn!(input = line, error = %err, "command rejected");
                output.write_all(format!("error: {err}\n").as_bytes()).await?;
            }
        }
        output.flush().await?;
    }

    tracing::info!(
        items = session.ledger().total_item_count(),
        total = %session.ledger().total_price(),
        "session ended"
    );
    Ok(())
}
