//! src/net/remote.rs
//!
//! Tiny line-based TCP control server: feed hits into graphs and start, stop
//! or inspect them from another process.

use std::io::{self, BufRead, BufReader, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::{Arc, PoisonError};
use std::thread;

use log::{debug, info, warn};

use crate::graph::shared::{GraphGuard, SharedGraph};

/// Bind `addr` and serve clients until the listener fails.
pub fn remote_server(addr: &str, graphs: Vec<SharedGraph>) -> io::Result<()> {
    let listener = TcpListener::bind(addr)?;
    info!("remote control listening on {}", addr);
    serve(listener, graphs);
    Ok(())
}

/// Accept clients on `listener`, one handler thread each.
pub fn serve(listener: TcpListener, graphs: Vec<SharedGraph>) {
    let graphs = Arc::new(graphs);
    for stream in listener.incoming() {
        match stream {
            Ok(s) => {
                let g = graphs.clone();
                thread::spawn(move || {
                    if let Err(e) = handle_remote_client(s, g) {
                        debug!("remote client ended: {}", e);
                    }
                });
            }
            Err(e) => {
                warn!("remote_server: accept error: {}", e);
            }
        }
    }
}

/// Handle a single client; one reply line per command.
pub fn handle_remote_client(s: TcpStream, graphs: Arc<Vec<SharedGraph>>) -> io::Result<()> {
    let peer = s
        .peer_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "<peer?>".into());
    debug!("remote client connected: {}", peer);
    let mut writer = s.try_clone()?;
    let mut rdr = BufReader::new(s);
    let mut line = String::new();

    loop {
        line.clear();
        if rdr.read_line(&mut line)? == 0 {
            break;
        }
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        let (reply, close) = handle_command(raw, &graphs);
        writer.write_all(reply.as_bytes())?;
        writer.write_all(b"\n")?;
        if close {
            break;
        }
    }

    debug!("remote client disconnected: {}", peer);
    writer.shutdown(Shutdown::Both)
}

fn with_graph<F>(graphs: &[SharedGraph], idx: &str, f: F) -> String
where
    F: FnOnce(&mut GraphGuard<'_>) -> String,
{
    let Ok(idx) = idx.parse::<usize>() else {
        return "ERR idx".to_string();
    };
    match graphs.get(idx) {
        Some(gs) => {
            let mut g = gs.write().unwrap_or_else(PoisonError::into_inner);
            f(&mut g)
        }
        None => format!("ERR no graph {}", idx),
    }
}

/// Execute one command line. Returns the reply and whether to hang up.
///
/// Commands:
/// - `hit <idx> [count]`
/// - `start <idx>`
/// - `stop <idx>`
/// - `stats <idx>`
/// - `quit`
pub fn handle_command(raw: &str, graphs: &[SharedGraph]) -> (String, bool) {
    let parts: Vec<_> = raw.split_whitespace().collect();
    let Some(cmd) = parts.first() else {
        return ("ERR empty".to_string(), false);
    };

    let reply = match cmd.to_lowercase().as_str() {
        "hit" if parts.len() == 2 || parts.len() == 3 => {
            let count = match parts.get(2).map(|c| c.parse::<u64>()) {
                None => Ok(1),
                Some(Ok(n)) => Ok(n),
                Some(Err(_)) => Err(()),
            };
            match count {
                Ok(n) => with_graph(graphs, parts[1], |g| {
                    g.graph.add_hits(n);
                    "OK".to_string()
                }),
                Err(()) => "ERR count".to_string(),
            }
        }

        "start" if parts.len() == 2 => with_graph(graphs, parts[1], |g| {
            g.graph.start();
            "OK".to_string()
        }),

        "stop" if parts.len() == 2 => with_graph(graphs, parts[1], |g| {
            g.graph.stop();
            "OK".to_string()
        }),

        "stats" if parts.len() == 2 => with_graph(graphs, parts[1], |g| {
            let rates = g.graph.rates();
            format!(
                "OK running={} pending={} ticks={} peak={} ceiling={} hps={} fps={}",
                g.graph.is_running(),
                g.graph.pending_hits(),
                g.graph.ticks(),
                g.graph.history().max(),
                g.graph
                    .max_axes_point()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "-".into()),
                rates
                    .map(|r| r.hits_per_second.to_string())
                    .unwrap_or_else(|| "-".into()),
                rates
                    .map(|r| r.frames_per_second.to_string())
                    .unwrap_or_else(|| "-".into()),
            )
        }),

        "quit" => return ("OK bye".to_string(), true),

        _ => format!("ERR unknown {}", parts.join(" ")),
    };
    (reply, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::frame::RepaintScheduler;
    use crate::graph::GraphConfig;
    use crate::graph::config::Variant;
    use crate::graph::shared::{GraphShared, share};
    use ratatui::style::Color;

    fn graphs() -> Vec<SharedGraph> {
        let g = GraphShared::new(
            GraphConfig::activity(),
            "test",
            Variant::Activity,
            Color::Cyan,
            Box::new(ManualClock::default()),
            Box::new(RepaintScheduler::new()),
        )
        .unwrap();
        vec![share(g)]
    }

    #[test]
    fn hit_adds_to_buffer() {
        let graphs = graphs();
        assert_eq!(handle_command("hit 0", &graphs).0, "OK");
        assert_eq!(handle_command("HIT 0 4", &graphs).0, "OK");
        assert_eq!(graphs[0].read().unwrap().graph.pending_hits(), 5);
    }

    #[test]
    fn start_and_stop() {
        let graphs = graphs();
        handle_command("start 0", &graphs);
        assert!(graphs[0].read().unwrap().graph.is_running());
        handle_command("stop 0", &graphs);
        assert!(!graphs[0].read().unwrap().graph.is_running());
    }

    #[test]
    fn stats_reports_state() {
        let graphs = graphs();
        handle_command("hit 0 2", &graphs);
        let (reply, close) = handle_command("stats 0", &graphs);
        assert!(!close);
        assert_eq!(
            reply,
            "OK running=false pending=2 ticks=0 peak=0 ceiling=- hps=- fps=-"
        );
    }

    #[test]
    fn errors() {
        let graphs = graphs();
        assert_eq!(handle_command("hit 3", &graphs).0, "ERR no graph 3");
        assert_eq!(handle_command("hit x", &graphs).0, "ERR idx");
        assert_eq!(handle_command("hit 0 many", &graphs).0, "ERR count");
        assert_eq!(handle_command("bogus 1", &graphs).0, "ERR unknown bogus 1");
        assert_eq!(handle_command("quit", &graphs), ("OK bye".to_string(), true));
    }

    #[test]
    fn serves_over_tcp() {
        let graphs = graphs();
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let served = graphs.clone();
        thread::spawn(move || serve(listener, served));

        let mut client = TcpStream::connect(addr).unwrap();
        client.write_all(b"hit 0 3\nquit\n").unwrap();
        let mut replies = String::new();
        let mut rdr = BufReader::new(client);
        rdr.read_line(&mut replies).unwrap();
        rdr.read_line(&mut replies).unwrap();
        assert_eq!(replies, "OK\nOK bye\n");
        assert_eq!(graphs[0].read().unwrap().graph.pending_hits(), 3);
    }
}
