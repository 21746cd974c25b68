use optional_default::optional_default;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
enum Mode {
    A,
    B,
}

optional_default! {
    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Settings {
        #[serde(rename = "mode", skip_serializing_if = "Option::is_none")]
        mode: Mode = Mode::A,
    }
}

fn main() -> serde_json::Result<()> {
    let mut settings = Settings::default();

    println!("mode: {:?}", settings.mode());
    println!("default omitted: {}", serde_json::to_string(&settings)?);

    settings.set_mode(Mode::B);
    println!("mode: {:?}", settings.mode());
    println!("explicit value: {}", serde_json::to_string(&settings)?);

    settings.set_mode(Mode::A);
    println!("back to default: {}", serde_json::to_string(&settings)?);

    Ok(())
}
