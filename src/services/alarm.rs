//! Siren collaborator. Playing is fire-and-forget: failures are logged and dropped.

use crate::domain::models::AlarmSettings;
use std::io::Write;
use std::process::{Command, Stdio};

pub trait Siren {
    fn play(&self) -> anyhow::Result<()>;
}

/// Terminal bell on stderr.
pub struct BellSiren;

impl Siren for BellSiren {
    fn play(&self) -> anyhow::Result<()> {
        let mut err = std::io::stderr();
        err.write_all(b"\x07")?;
        err.flush()?;
        Ok(())
    }
}

/// Spawns an external player and does not wait for it.
pub struct CommandSiren {
    pub program: String,
    pub args: Vec<String>,
}

impl Siren for CommandSiren {
    fn play(&self) -> anyhow::Result<()> {
        Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}

pub struct MutedSiren;

impl Siren for MutedSiren {
    fn play(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

pub fn siren_from_settings(settings: &AlarmSettings, muted: bool) -> Box<dyn Siren> {
    if muted || !settings.enabled {
        return Box::new(MutedSiren);
    }
    match settings.command.split_first() {
        Some((program, args)) => Box::new(CommandSiren {
            program: program.clone(),
            args: args.to_vec(),
        }),
        None => Box::new(BellSiren),
    }
}

/// One attempt, no retry. Returns whether the siren reported success.
pub fn sound_alarm(siren: &dyn Siren) -> bool {
    match siren.play() {
        Ok(()) => {
            tracing::info!("siren played");
            true
        }
        Err(e) => {
            tracing::debug!(error = %e, "siren failed, ignored");
            false
        }
    }
}
