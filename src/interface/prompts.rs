use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};

use crate::error::{MenuError, Result};
use crate::planner::{ActivityLevel, Biometrics, Sex};

/// Prompt for a number, with a default shown to the user.
fn prompt_number<T: FromStr>(prompt: &str, default: &str) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| MenuError::InvalidInput(format!("Invalid number: {}", input)))
}

pub fn prompt_sex() -> Result<Sex> {
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&["Male", "Female"])
        .default(0)
        .interact()?;

    Ok(if selection == 0 { Sex::Male } else { Sex::Female })
}

pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let options: Vec<String> = (1..=5)
        .map(|level| {
            // Levels 1-5 are always valid
            let description = ActivityLevel::new(level)
                .map(|a| a.description())
                .unwrap_or_default();
            format!("{} - {}", level, description)
        })
        .collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(0)
        .interact()?;

    ActivityLevel::new(selection as u8 + 1)
}

/// Collect body measurements for the calorie calculator.
pub fn prompt_biometrics() -> Result<Biometrics> {
    println!("Calorie calculator: enter your data to estimate daily needs.");

    let sex = prompt_sex()?;
    let age_years = prompt_number("Age (years)", "30")?;
    let weight_kg = prompt_number("Weight (kg)", "70")?;
    let height_cm = prompt_number("Height (cm)", "175")?;
    let activity = prompt_activity_level()?;

    let bio = Biometrics {
        sex,
        age_years,
        weight_kg,
        height_cm,
        activity,
    };
    bio.validate()?;
    Ok(bio)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
