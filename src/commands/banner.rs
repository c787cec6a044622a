// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Animated slogan banner
//!
//! Redraws the slogan on one terminal line every color tick and switches the
//! background name every background tick, until the tick budget runs out or
//! Ctrl+C is pressed.

use std::future::Future;
use std::io::{self, Write};

use crossterm::{
    cursor::MoveToColumn,
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use crate::cli::args::BannerArgs;
use crate::error::Result;
use crate::theme::{HueCycle, Rgb, BACKGROUND_TICK, COLOR_TICK, SLOGAN};
use crate::workspace::{Workspace, WorkspacePaths};

/// Execute the banner command
pub async fn execute(args: &BannerArgs, paths: WorkspacePaths) -> Result<()> {
    let mut ws = Workspace::open(paths)?;
    let mut stdout = io::stdout();

    animate(&mut ws, args.ticks, tokio::signal::ctrl_c(), &mut stdout).await?;

    stdout.queue(ResetColor)?.queue(Print("\n"))?;
    stdout.flush()?;
    Ok(())
}

/// Run the color and background timers until `ticks` slogans have been drawn
/// or `stop` resolves. Returns the number of slogans drawn.
async fn animate<F: Future>(
    ws: &mut Workspace,
    ticks: u32,
    stop: F,
    out: &mut impl Write,
) -> Result<u32> {
    let accent = ws.settings.accent_color();
    let mut hues = HueCycle::default();

    let mut color_timer = tokio::time::interval(COLOR_TICK);
    let mut background_timer = tokio::time::interval(BACKGROUND_TICK);
    // Both intervals fire immediately; skip the first background tick so the
    // initial image stays for a full period.
    background_timer.tick().await;

    // One future for the whole loop so a stop signal raised mid-draw is kept.
    tokio::pin!(stop);
    let mut drawn = 0;

    while drawn < ticks {
        tokio::select! {
            _ = color_timer.tick() => {
                let color = accent.unwrap_or_else(|| hues.tick());
                let background = ws
                    .backgrounds
                    .current()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().into_owned());
                draw(&mut *out, color, background.as_deref())?;
                drawn += 1;
            }
            _ = background_timer.tick() => {
                if let Some(next) = ws.backgrounds.rotate() {
                    tracing::debug!(background = %next.display(), "background rotated");
                }
            }
            _ = &mut stop => {
                break;
            }
        }
    }

    Ok(drawn)
}

fn draw(out: &mut impl Write, color: Rgb, background: Option<&str>) -> Result<()> {
    out.queue(MoveToColumn(0))?
        .queue(Clear(ClearType::CurrentLine))?
        .queue(SetForegroundColor(color.into()))?
        .queue(Print(SLOGAN))?
        .queue(ResetColor)?;
    if let Some(name) = background {
        out.queue(Print(format!("  [{}]", name)))?;
    }
    out.flush()?;
    Ok(())
}
