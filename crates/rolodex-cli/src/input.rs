use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::debug;

/// Events the session loop reacts to, in arrival order.
#[derive(Debug)]
pub enum Input {
    Line(String),
    End,
    Interrupt,
    Failed(io::Error),
}

/// Feeds stdin lines and Ctrl-C into one channel.
pub fn stdin_events() -> io::Result<Receiver<Input>> {
    let (events, receiver) = mpsc::channel();
    listen_for_interrupt(events.clone())?;
    thread::Builder::new()
        .name("rolodex-stdin".to_string())
        .spawn(move || read_lines(io::stdin().lock(), &events))?;
    Ok(receiver)
}

/// Sends every line of `input` followed by `End`. Stops early once the
/// receiving side is gone.
pub fn read_lines<R: BufRead>(mut input: R, events: &Sender<Input>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let event = match input.read_until(b'\n', &mut buf) {
            Ok(0) => Input::End,
            Ok(_) => Input::Line(String::from_utf8_lossy(&buf).into_owned()),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => Input::Failed(err),
        };
        let last = !matches!(event, Input::Line(_));
        if events.send(event).is_err() || last {
            return;
        }
    }
}

#[cfg(unix)]
fn listen_for_interrupt(events: Sender<Input>) -> io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    // Registered before returning so an early Ctrl-C is queued, not fatal.
    let mut sigint = {
        let _guard = runtime.enter();
        signal(SignalKind::interrupt())?
    };
    thread::Builder::new()
        .name("rolodex-signal".to_string())
        .spawn(move || {
            runtime.block_on(async {
                while sigint.recv().await.is_some() {
                    debug!("interrupt received");
                    if events.send(Input::Interrupt).is_err() {
                        break;
                    }
                }
            })
        })?;
    Ok(())
}

#[cfg(not(unix))]
fn listen_for_interrupt(events: Sender<Input>) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    thread::Builder::new()
        .name("rolodex-signal".to_string())
        .spawn(move || {
            runtime.block_on(async {
                while tokio::signal::ctrl_c().await.is_ok() {
                    debug!("interrupt received");
                    if events.send(Input::Interrupt).is_err() {
                        break;
                    }
                }
            })
        })?;
    Ok(())
}
