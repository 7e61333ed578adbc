use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_path};

pub fn show() -> Result<()> {
    let settings = load_settings();
    println!("Settings:        {}", settings_path().display());
    println!("Dust threshold:  {}", settings.dust_threshold);
    println!("Producer:        {}", settings.producer);
    Ok(())
}

pub fn set(dust_threshold: Option<f64>, producer: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(threshold) = dust_threshold {
        settings.dust_threshold = threshold;
    }
    if let Some(producer) = producer {
        settings.producer = producer;
    }
    save_settings(&settings)?;
    println!("Settings saved to {}", settings_path().display());
    Ok(())
}
