use anyhow::Result;
use chrono::Utc;
use ferritin_core::job::job_name;

pub fn execute(suffix: Option<&str>) -> Result<()> {
    println!("{}", job_name(Utc::now(), suffix));
    Ok(())
}
