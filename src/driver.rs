//! Headless driver - plays sessions without a screen
//!
//! Two producer threads stand in for the surrounding application: a gravity
//! timer sending [`Command::Tick`] and a simulated player sending random moves.
//! Both feed one channel, and the consuming thread is the only owner of the
//! [`Session`], so commands are applied strictly one at a time.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{debug, info};

use crate::core::Session;
use crate::settings::Settings;
use crate::types::Command;

/// Summary of one finished (or abandoned) game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameReport {
    pub score: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    pub ticks: u32,
    /// Stopped by the tick limit rather than by game over
    pub truncated: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct RunLimits {
    pub games: u32,
    pub max_ticks: u32,
}

/// Pending commands before producers block
const QUEUE_DEPTH: usize = 64;

/// Never below one microsecond, so producers cannot spin
fn scaled(period_ms: u32, speedup: u32) -> Duration {
    Duration::from_micros(u64::from(period_ms) * 1000 / u64::from(speedup.max(1)))
        .max(Duration::from_micros(1))
}

fn spawn_timer(tx: Sender<Command>, period: Duration) -> thread::JoinHandle<()> {
    thread::spawn(move || loop {
        thread::sleep(period);
        if tx.send(Command::Tick).is_err() {
            return;
        }
    })
}

fn spawn_player(tx: Sender<Command>, period: Duration, seed: u64) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut rng = fastrand::Rng::with_seed(seed);
        loop {
            thread::sleep(period);
            let command = Command::PLAYER[rng.usize(..Command::PLAYER.len())];
            if tx.send(command).is_err() {
                return;
            }
        }
    })
}

/// Apply commands from `rx` until `limits.games` games have been reported
pub fn consume(session: &mut Session, rx: &Receiver<Command>, limits: RunLimits) -> Vec<GameReport> {
    let mut reports = Vec::with_capacity(limits.games as usize);
    let mut ticks: u32 = 0;

    while (reports.len() as u32) < limits.games {
        let Ok(command) = rx.recv() else {
            break;
        };

        session.apply(command);
        if command == Command::Tick {
            ticks += 1;
        }

        let truncated = !session.game_over() && ticks >= limits.max_ticks;
        if session.game_over() || truncated {
            let report = GameReport {
                score: session.score(),
                lines: session.lines(),
                pieces_locked: session.pieces_locked(),
                ticks,
                truncated,
            };
            info!(
                "game {} finished: score {} lines {} pieces {} ticks {}{}",
                reports.len() + 1,
                report.score,
                report.lines,
                report.pieces_locked,
                report.ticks,
                if truncated { " (tick limit)" } else { "" }
            );
            reports.push(report);
            session.reset();
            ticks = 0;
        }
    }

    reports
}

/// Play `limits.games` games with a timer thread and a random player
pub fn run(settings: &Settings, limits: RunLimits) -> Vec<GameReport> {
    let mut session = Session::new(settings.session);
    debug!("driver seed {}", session.seed());

    let (tx, rx) = bounded(QUEUE_DEPTH);
    let timer = spawn_timer(
        tx.clone(),
        scaled(session.config().gravity_ms, settings.driver.speedup),
    );
    let player = spawn_player(
        tx,
        scaled(settings.driver.input_interval_ms, settings.driver.speedup),
        session.seed(),
    );

    let reports = consume(&mut session, &rx, limits);

    // Producers notice the closed channel on their next send, including one
    // blocked on a full queue.
    drop(rx);
    let _ = timer.join();
    let _ = player.join();

    reports
}
