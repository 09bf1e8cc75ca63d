use serde::Serialize;

use crate::error::AppResult;

pub fn print_line(line: &str) -> AppResult<()> {
    println!("{line}");
    Ok(())
}

pub fn print_yaml<T: Serialize>(value: &T) -> AppResult<()> {
    let payload = serde_yaml::to_string(value)?;
    print!("{payload}");
    Ok(())
}
