use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::focus;
use crate::models::{FocusSelection, Snapshot};
use crate::nudge::{self, ShieldHeading};

/// OS-level intervention surface that renders the nudge.
pub trait ShieldSurface {
    fn update_shield(&mut self, title: &str, subtitle: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShieldPayload {
    pub title: String,
    pub subtitle: String,
}

/// Writes the shield configuration where the device extension picks it up.
pub struct JsonFileShield {
    path: PathBuf,
}

impl JsonFileShield {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ShieldSurface for JsonFileShield {
    fn update_shield(&mut self, title: &str, subtitle: &str) -> anyhow::Result<()> {
        let payload = ShieldPayload {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        };
        let body = serde_json::to_string_pretty(&payload)?;
        std::fs::write(&self.path, body)
            .with_context(|| format!("failed to write shield config {}", self.path.display()))?;
        log::info!("shield config written to {}", self.path.display());
        Ok(())
    }
}

pub struct StdoutShield;

impl ShieldSurface for StdoutShield {
    fn update_shield(&mut self, title: &str, subtitle: &str) -> anyhow::Result<()> {
        println!("{title}\n\n{subtitle}");
        Ok(())
    }
}

/// Runs select -> compose -> push once over the given snapshot.
pub fn push_nudge<S, R>(
    snapshot: &Snapshot,
    manual_override: Option<&str>,
    heading: ShieldHeading,
    now: DateTime<Utc>,
    rng: &mut R,
    surface: &mut S,
) -> anyhow::Result<(FocusSelection, ShieldPayload)>
where
    S: ShieldSurface + ?Sized,
    R: Rng + ?Sized,
{
    let selection = focus::select_focus(
        snapshot.goals.as_deref(),
        snapshot.assignments.as_deref(),
        manual_override,
        snapshot.nudge.as_ref(),
        now,
    );
    let message = nudge::compose_for(&selection, rng);
    let payload = ShieldPayload {
        title: heading.title().to_string(),
        subtitle: heading.subtitle(&message),
    };

    surface
        .update_shield(&payload.title, &payload.subtitle)
        .context("shield update failed")?;
    Ok((selection, payload))
}
