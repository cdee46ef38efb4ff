//! Handler for `reflection`.

use chrono::Local;

use super::output;
use crate::domain::Reflection;
use crate::error::Result;
use crate::infrastructure::bootstrap;

fn render(reflection: &Reflection) {
    output::section(reflection.title);
    output::lines(reflection.content);
}

pub fn execute(all: bool) -> Result<()> {
    let service = bootstrap::build_reflection_service();

    if all {
        if output::is_json() {
            output::json_result("reflection", "reflections", service.all());
            return Ok(());
        }
        service.all().iter().for_each(render);
        return Ok(());
    }

    let today = Local::now().date_naive();
    let reflection = service.today(today);
    if output::is_json() {
        output::json_output(serde_json::json!({
            "command": "reflection",
            "date": today,
            "reflection": reflection,
        }));
        return Ok(());
    }

    output::note("خاطرة اليوم");
    render(reflection);
    Ok(())
}
