use anyhow::Result;
use std::io::{self, Write};

use nutricare::core::units::Quantity;
use nutricare::models::config::Config;

pub fn run(skip: bool) -> Result<()> {
    let mut config = Config::load()?;

    if skip {
        config.save()?;
        println!("Config initialized with defaults at {}", Config::path().display());
        return Ok(());
    }

    let system = config.units.system;
    println!("NutriCare initial setup ({} units)\n", system);
    let steps = [
        ("weight", format!("Current weight ({})", Quantity::Weight.unit(system))),
        ("height", format!("Height ({})", Quantity::Height.unit(system))),
        ("birth_year", "Birth year".to_string()),
        ("sex", "Sex (male/female/other)".to_string()),
        (
            "activity",
            "Activity level (sedentary/light/moderate/active/very_active)".to_string(),
        ),
        ("goal", "Goal (weight_loss/maintain/muscle_gain)".to_string()),
    ];

    // Same parsing and validation as `config set`; re-ask until accepted.
    for (key, label) in &steps {
        loop {
            let answer = prompt(label)?;
            match config.set(key, &answer) {
                Ok(()) => break,
                Err(e) => println!("{}", e),
            }
        }
    }

    config.save()?;
    println!("\nSetup complete. Config stored in {}", Config::path().display());
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        anyhow::bail!("setup aborted: no input (use `init --skip` for defaults)");
    }
    Ok(buf.trim().to_string())
}
