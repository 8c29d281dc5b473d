//! Preview command implementation
//!
//! Augments one template (or all ten) and prints each result as ASCII art.

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use mnist1d_augment::{render_ascii, Rules, Templates};
use mnist1d_spec::{RulesConfig, NUM_CLASSES};

use crate::input::load_config;

/// Default width of the rendered rows.
pub const DEFAULT_WIDTH: usize = 40;

/// Run the preview command
///
/// # Arguments
/// * `config_path` - Optional path to the config file (defaults otherwise)
/// * `seed` - Optional seed override
/// * `label` - Template to augment; every template when `None`
/// * `width` - Number of columns per rendered row
pub fn run(
    config_path: Option<&str>,
    seed: Option<u64>,
    label: Option<u8>,
    width: usize,
) -> Result<ExitCode> {
    let config = load_config(config_path, seed)?;
    for (label, art) in render_previews(&config.rules, config.seed, label, width)? {
        println!("{} {}", "Label:".cyan().bold(), label);
        println!("{}\n", art);
    }
    Ok(ExitCode::SUCCESS)
}

/// Augments the selected templates and renders each.
///
/// All selected templates draw from one stream seeded with `seed`, in label
/// order.
pub fn render_previews(
    rules_config: &RulesConfig,
    seed: u64,
    label: Option<u8>,
    width: usize,
) -> Result<Vec<(u8, String)>> {
    if let Some(l) = label {
        if usize::from(l) >= NUM_CLASSES {
            bail!("label must be below {}, got {}", NUM_CLASSES, l);
        }
    }
    if width == 0 {
        bail!("width must be at least 1");
    }

    let templates = Templates::digits();
    let mut rules = Rules::from_seed(rules_config.clone(), seed)
        .context("Failed to build augmentation rules")?;

    let labels: Vec<u8> = match label {
        Some(l) => vec![l],
        None => templates.y.clone(),
    };

    labels
        .into_iter()
        .map(|l| -> Result<(u8, String)> {
            let (x, _) = rules
                .transform(&templates.x[usize::from(l)], &templates.t)
                .with_context(|| format!("Failed to augment template {}", l))?;
            Ok((l, render_ascii(&x, width)))
        })
        .collect()
}
