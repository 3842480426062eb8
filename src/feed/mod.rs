use std::{
    fs::File,
    io::{BufWriter, Write},
    net::UdpSocket,
    path::PathBuf,
    thread,
    time::Duration,
};
use tracing::info;

use crate::{
    config::FeedConfig,
    error::{FeedError, ProcessingError},
    source::Dataset,
    wire::MessageFormat,
};

/// Drives the whole read → transform → transmit → pace loop: load the CSV,
/// reverse it so the oldest record goes out first, then send one datagram per
/// row with a fixed pause between sends. Fire-and-forget — nothing listens
/// for acknowledgments and nothing is retried.
pub struct Feeder {
    socket: UdpSocket,
    target: String,
    input: PathBuf,
    format: MessageFormat,
    interval: Duration,
    echo: Option<PathBuf>,
}

impl Feeder {
    /// Bind the one outbound socket for this run. It is reused for every send
    /// and released implicitly at process exit.
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        let socket = UdpSocket::bind("0.0.0.0:0").map_err(ProcessingError::Send)?;
        Ok(Self {
            socket,
            target: config.target(),
            input: PathBuf::from(&config.input),
            format: config.format,
            interval: config.interval(),
            echo: config.echo.as_ref().map(PathBuf::from),
        })
    }

    /// Run one full pass over the input file. Returns the number of datagrams
    /// sent. Any fault aborts the pass; rows already sent stay sent.
    pub fn run(&mut self) -> Result<usize, FeedError> {
        info!(
            "starting to stream data from {} to {}",
            self.input.display(),
            self.target
        );

        let mut dataset = Dataset::load(&self.input)?;
        dataset.reverse();

        // The echo file stays open for the whole loop. Header first, then one
        // line per transmitted row, flushed as we go so an interrupt leaves
        // the rows sent so far on disk.
        let mut echo = match &self.echo {
            Some(path) => {
                let file = File::create(path).map_err(ProcessingError::Echo)?;
                let mut writer = BufWriter::new(file);
                writeln!(writer, "{}", dataset.header.join(","))
                    .map_err(ProcessingError::Echo)?;
                Some(writer)
            }
            None => None,
        };

        let mut sent = 0;
        for row in &dataset.rows {
            let message = self.format.render(row)?;
            self.socket
                .send_to(&message, &self.target)
                .map_err(ProcessingError::Send)?;
            sent += 1;
            info!(
                payload = %String::from_utf8_lossy(&message).trim_end(),
                target = %self.target,
                "sent datagram; hit Ctrl-C to stop"
            );

            if let Some(writer) = echo.as_mut() {
                writeln!(writer, "{}", row.join(",")).map_err(ProcessingError::Echo)?;
                writer.flush().map_err(ProcessingError::Echo)?;
            }

            thread::sleep(self.interval);
        }

        info!(sent, "streaming complete");
        Ok(sent)
    }
}
