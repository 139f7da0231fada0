use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use attendance_core::{
    generate_template, register_schedule, resolve_day, AppContext, AttendanceError, Day,
};
use tracing::info;

use crate::prompt::Prompter;
use crate::report;

fn choose_path<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    path: Option<PathBuf>,
    label: &str,
) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => prompter
            .ask_path(label)?
            .ok_or_else(|| AttendanceError::NoSelection.into()),
    }
}

pub fn template<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    path: Option<PathBuf>,
) -> Result<()> {
    let path = choose_path(prompter, path, "Save schedule template to")?;
    generate_template(&path)?;
    prompter.say(format!(
        "Schedule template generated successfully at {}.\nPlease fill in the class details in the sheet.",
        path.display()
    ))?;
    Ok(())
}

pub fn register<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    prompter: &mut Prompter<R, W>,
    path: Option<PathBuf>,
) -> Result<()> {
    let path = choose_path(prompter, path, "Schedule file to register")?;
    let archive = ctx.config.schedule_copy_path();
    let added = register_schedule(&mut ctx.store, &path, Some(&archive))?;
    prompter.say(format!(
        "Class schedule registered successfully! ({} classes added)",
        added
    ))?;
    Ok(())
}

pub fn today<R: BufRead, W: Write>(
    ctx: &AppContext,
    prompter: &mut Prompter<R, W>,
    day: Option<&str>,
) -> Result<()> {
    let day = resolve_day(day)?;
    let classes = ctx.store.classes_on(day);
    if classes.is_empty() {
        prompter.say(format!("No classes scheduled for {}.", day))?;
        info!("No classes scheduled for {}.", day);
        return Ok(());
    }

    prompter.say(format!("Classes for {}:\n", day))?;
    for class_name in classes {
        prompter.say(format!("  {}", class_name))?;
    }
    info!("Displayed classes for {}.", day);
    Ok(())
}

/// Which classes of `day` to mark: the ones named on the command line (each
/// must be scheduled that day), or the ones picked by answering per class.
fn select_classes<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    day: Day,
    scheduled: &[String],
    named: Vec<String>,
    question: &str,
    mark_on: bool,
) -> Result<Vec<String>> {
    if !named.is_empty() {
        if let Some(unknown) = named.iter().find(|n| !scheduled.contains(n)) {
            return Err(AttendanceError::UnknownClass {
                day,
                class_name: unknown.clone(),
            }
            .into());
        }
        return Ok(named);
    }

    let mut selected = Vec::new();
    for class_name in scheduled {
        let answer = prompter.ask_yes_no(&format!("{}: {}?", question, class_name))?;
        if answer == mark_on {
            selected.push(class_name.clone());
        }
    }
    Ok(selected)
}

pub fn absent<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    prompter: &mut Prompter<R, W>,
    day: Option<&str>,
    classes: Vec<String>,
) -> Result<()> {
    let day = resolve_day(day)?;
    let scheduled = ctx.store.classes_on(day).to_vec();
    if scheduled.is_empty() {
        prompter.say(format!("No classes scheduled for {}.", day))?;
        info!("No classes scheduled for {}.", day);
        return Ok(());
    }

    // A "no" to "did you attend" is an absence.
    let absent = select_classes(
        prompter,
        day,
        &scheduled,
        classes,
        "Did you attend the class",
        false,
    )?;
    if absent.is_empty() {
        prompter.say("No absent classes recorded.")?;
        info!("No absent classes recorded.");
        return Ok(());
    }

    let updated = ctx.store.record_absences(&absent)?;
    prompter.say("Absent classes recorded successfully!")?;
    for (class_name, count) in updated {
        prompter.say(format!("  {}: {} absences", class_name, count))?;
    }
    Ok(())
}

pub fn cancel<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    prompter: &mut Prompter<R, W>,
    day: Option<&str>,
    classes: Vec<String>,
) -> Result<()> {
    let day = resolve_day(day)?;
    let scheduled = ctx.store.classes_on(day).to_vec();
    if scheduled.is_empty() {
        prompter.say(format!("No classes scheduled for {}.", day))?;
        info!("No classes scheduled for {}.", day);
        return Ok(());
    }

    let cancelled = select_classes(
        prompter,
        day,
        &scheduled,
        classes,
        "Is the class cancelled",
        true,
    )?;
    if cancelled.is_empty() {
        prompter.say("No cancelled classes recorded.")?;
        info!("No cancelled classes recorded.");
        return Ok(());
    }

    ctx.store.record_cancellations(&cancelled)?;
    prompter.say("Cancelled classes recorded successfully!")?;
    show_report(ctx, prompter, false)
}

pub fn show_report<R: BufRead, W: Write>(
    ctx: &AppContext,
    prompter: &mut Prompter<R, W>,
    json: bool,
) -> Result<()> {
    if json {
        prompter.say(report::attendance_json(&ctx.store)?)?;
    } else {
        match report::attendance_table(&ctx.store) {
            Some(table) => {
                prompter.say("Attendance Percentage:")?;
                prompter.say(table)?;
            }
            None => prompter.say("No classes registered yet.")?,
        }
    }
    info!("Attendance percentage calculated successfully.");
    Ok(())
}

pub fn export<R: BufRead, W: Write>(
    ctx: &AppContext,
    prompter: &mut Prompter<R, W>,
    path: Option<PathBuf>,
) -> Result<()> {
    let path = path.unwrap_or_else(|| ctx.config.export_path());
    let rows = ctx.store.export_csv(&path)?;
    prompter.say(format!(
        "Updated attendance data saved to {} ({} rows).",
        path.display(),
        rows
    ))?;
    Ok(())
}

pub fn reset<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    prompter: &mut Prompter<R, W>,
    confirmed: bool,
) -> Result<()> {
    if !confirmed && !prompter.ask_yes_no("Are you sure you want to reset all data?")? {
        prompter.say("Reset cancelled.")?;
        info!("Reset cancelled by user.");
        return Ok(());
    }
    ctx.store.reset_all()?;
    prompter.say("All data has been reset.")?;
    Ok(())
}
