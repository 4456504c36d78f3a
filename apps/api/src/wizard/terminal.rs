//! Line-oriented terminal front end for the wizard.
//!
//! Reads commands from any `AsyncBufRead` and writes screens to any `Write`,
//! so the whole flow can be driven from a script in tests. End of input quits.

use std::io::Write;

use anyhow::{anyhow, bail, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::i18n::{t, t_with, Language};
use crate::presentation::render::{
    render_error, render_footer, render_form_prompt, render_notice, render_results,
    render_welcome,
};
use crate::wizard::form::{FormDraft, FormField};
use crate::wizard::{RoadmapSource, Step, Wizard};

enum Flow {
    Continue,
    Quit,
}

pub async fn run<R, W>(
    wizard: &mut Wizard,
    source: &dyn RoadmapSource,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        let flow = match wizard.step() {
            Step::Welcome => welcome(wizard, &mut lines, out).await?,
            Step::Form => form(wizard, source, &mut lines, out).await?,
            Step::Results => results(wizard, &mut lines, out).await?,
        };
        if let Flow::Quit = flow {
            write!(out, "{}", render_footer(wizard.language()))?;
            out.flush()?;
            return Ok(());
        }
    }
}

async fn prompt<R, W>(lines: &mut Lines<R>, out: &mut W) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "> ")?;
    out.flush()?;
    Ok(lines.next_line().await?.map(|line| line.trim().to_string()))
}

async fn welcome<R, W>(wizard: &mut Wizard, lines: &mut Lines<R>, out: &mut W) -> Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(out, "{}", render_welcome(wizard.language()))?;
    let Some(line) = prompt(lines, out).await? else {
        return Ok(Flow::Quit);
    };

    match line.as_str() {
        "" => wizard.start()?,
        "q" | "Q" => return Ok(Flow::Quit),
        other => {
            if let Some(language) = Language::parse(other) {
                wizard.set_language(language);
            }
        }
    }
    Ok(Flow::Continue)
}

/// Asks every field in order, then submits. A previous submission pre-fills
/// the draft; an empty answer keeps the pre-filled value. `:<code>` switches
/// language at any prompt.
async fn form<R, W>(
    wizard: &mut Wizard,
    source: &dyn RoadmapSource,
    lines: &mut Lines<R>,
    out: &mut W,
) -> Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut draft = wizard.profile().map(FormDraft::from).unwrap_or_default();

    for field in FormField::ALL {
        loop {
            writeln!(out, "{}", render_form_prompt(wizard.language(), field))?;
            let current = draft.value(field);
            if let Some(value) = &current {
                writeln!(out, "  = {value}")?;
            }
            let Some(line) = prompt(lines, out).await? else {
                return Ok(Flow::Quit);
            };

            if let Some(language) = line.strip_prefix(':').and_then(Language::parse) {
                wizard.set_language(language);
                continue;
            }
            if line.is_empty() && current.is_some() {
                break;
            }
            match draft.set(field, &line, wizard.language()) {
                Ok(()) => break,
                Err(invalid) => {
                    write!(out, "{}", render_notice(invalid.message(wizard.language())))?
                }
            }
        }
    }

    let profile = draft
        .into_profile(wizard.language())
        .map_err(|fields| anyhow!("form left incomplete: {fields:?}"))?;
    writeln!(out, "{}", t(wizard.language(), "form.generating"))?;
    wizard.submit(profile, source).await?;

    while let Some(message) = wizard.error().map(str::to_string) {
        write!(out, "{}", render_error(wizard.language(), &message))?;
        let Some(line) = prompt(lines, out).await? else {
            return Ok(Flow::Quit);
        };
        match line.to_lowercase().as_str() {
            "r" => {
                writeln!(out, "{}", t(wizard.language(), "form.generating"))?;
                wizard.retry(source).await?;
            }
            "d" => wizard.dismiss_error(),
            "q" => return Ok(Flow::Quit),
            _ => {}
        }
    }
    Ok(Flow::Continue)
}

async fn results<R, W>(wizard: &mut Wizard, lines: &mut Lines<R>, out: &mut W) -> Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let language = wizard.language();
    let (Some(profile), Some(result)) = (wizard.profile(), wizard.result()) else {
        bail!("results step reached without a roadmap");
    };
    write!(
        out,
        "{}",
        render_results(language, profile, result, wizard.checked())
    )?;
    let email = profile.email.clone();

    let Some(line) = prompt(lines, out).await? else {
        return Ok(Flow::Quit);
    };
    match line.to_lowercase().as_str() {
        "e" => write!(out, "{}", render_notice(t(language, "notice.edit")))?,
        "p" => write!(out, "{}", render_notice(t(language, "notice.pdf")))?,
        "m" => write!(
            out,
            "{}",
            render_notice(&t_with(language, "notice.email", &[("email", email.as_str())]))
        )?,
        "n" => wizard.generate_another()?,
        "q" => return Ok(Flow::Quit),
        other => {
            if let Ok(number) = other.parse::<usize>() {
                if let Some(index) = number.checked_sub(1) {
                    wizard.toggle_checklist(index);
                }
            } else if let Some(language) = Language::parse(other) {
                wizard.set_language(language);
            }
        }
    }
    Ok(Flow::Continue)
}
