use std::fs;
use std::path::Path;

/// Starter oracle tables: enough to roll prompts and run both generators.
const STARTER_TABLES: &str = r#"[
  {
    "name": "Action",
    "die": 6,
    "entries": [
      { "min": 1, "max": 1, "text": "Scheme" },
      { "min": 2, "max": 2, "text": "Clash" },
      { "min": 3, "max": 3, "text": "Weaken" },
      { "min": 4, "max": 4, "text": "Initiate" },
      { "min": 5, "max": 5, "text": "Create" },
      { "min": 6, "max": 6, "text": "Swear" }
    ]
  },
  {
    "name": "Theme",
    "die": 6,
    "entries": [
      { "min": 1, "max": 1, "text": "Risk" },
      { "min": 2, "max": 2, "text": "Debt" },
      { "min": 3, "max": 3, "text": "Duty" },
      { "min": 4, "max": 4, "text": "Fellowship" },
      { "min": 5, "max": 5, "text": "Home" },
      { "min": 6, "max": 6, "text": "Power" }
    ]
  },
  {
    "name": "Ask the Oracle",
    "aliases": ["ask"],
    "die": 100,
    "entries": [
      { "chance": 50, "text": "No" },
      { "chance": 100, "text": "Yes" }
    ]
  },
  {
    "name": "Pay the Price",
    "aliases": ["ptp"],
    "game": "ironsworn",
    "die": 100,
    "entries": [
      { "min": 1, "max": 2, "text": "[2x]" },
      { "min": 3, "max": 10, "text": "A person or community you care about is exposed to danger" },
      { "min": 11, "max": 18, "text": "You are separated from something or someone" },
      { "min": 19, "max": 28, "text": "Your action has an unintended effect" },
      { "min": 29, "max": 40, "text": "Something of value is lost or destroyed" },
      { "min": 41, "max": 52, "text": "The current situation worsens" },
      { "min": 53, "max": 62, "text": "A new enemy is revealed" },
      { "min": 63, "max": 72, "text": "It wastes valuable time or resources" },
      { "min": 73, "max": 82, "text": "You are harmed" },
      { "min": 83, "max": 90, "text": "You are stressed" },
      { "min": 91, "max": 98, "text": "A surprising development complicates your quest" },
      { "min": 99, "max": 100, "text": "[Action/Theme]" }
    ]
  },
  {
    "name": "Settlement Name",
    "game": "starforged",
    "die": 10,
    "entries": [
      { "min": 1, "max": 1, "text": "Deadrock" },
      { "min": 2, "max": 2, "text": "Sanctuary" },
      { "min": 3, "max": 3, "text": "Cinderhome" },
      { "min": 4, "max": 4, "text": "Firstlight" },
      { "min": 5, "max": 5, "text": "Stormhaven" },
      { "min": 6, "max": 6, "text": "Redfall" },
      { "min": 7, "max": 7, "text": "Meridian" },
      { "min": 8, "max": 8, "text": "Outpost 7" },
      { "min": 9, "max": 9, "text": "Dawnsong" },
      { "min": 10, "max": 10, "text": "Terminus Gate" }
    ]
  },
  {
    "name": "Settlement Location",
    "game": "starforged",
    "die": 10,
    "entries": [
      { "min": 1, "max": 6, "text": "Planetside" },
      { "min": 7, "max": 9, "text": "Orbital" },
      { "min": 10, "max": 10, "text": "Deep space" }
    ]
  },
  {
    "name": "Settlement First Look",
    "game": "starforged",
    "die": 10,
    "entries": [
      { "min": 1, "max": 2, "text": "Rusting industrial hulks" },
      { "min": 3, "max": 4, "text": "Sealed domes against a hostile sky" },
      { "min": 5, "max": 6, "text": "Defensive gun emplacements" },
      { "min": 7, "max": 8, "text": "Sprawling scrap-built warrens" },
      { "min": 9, "max": 10, "text": "Gleaming prefab modules" }
    ]
  },
  {
    "name": "Settlement Authority",
    "game": "starforged",
    "die": 10,
    "entries": [
      { "min": 1, "max": 2, "text": "None, lawless" },
      { "min": 3, "max": 4, "text": "Fractured leadership" },
      { "min": 5, "max": 6, "text": "Council of elders" },
      { "min": 7, "max": 8, "text": "Single strong leader" },
      { "min": 9, "max": 10, "text": "Corporate overseer" }
    ]
  },
  {
    "name": "Settlement Population (Terminus)",
    "game": "starforged",
    "die": 10,
    "entries": [
      { "min": 1, "max": 2, "text": "Dozens" },
      { "min": 3, "max": 5, "text": "Hundreds" },
      { "min": 6, "max": 8, "text": "Thousands" },
      { "min": 9, "max": 10, "text": "Tens of thousands" }
    ]
  },
  {
    "name": "Settlement Population (Outlands)",
    "game": "starforged",
    "die": 10,
    "entries": [
      { "min": 1, "max": 4, "text": "Dozens" },
      { "min": 5, "max": 8, "text": "Hundreds" },
      { "min": 9, "max": 10, "text": "Thousands" }
    ]
  },
  {
    "name": "Settlement Population (Expanse)",
    "game": "starforged",
    "die": 10,
    "entries": [
      { "min": 1, "max": 6, "text": "Dozens" },
      { "min": 7, "max": 9, "text": "Hundreds" },
      { "min": 10, "max": 10, "text": "Thousands" }
    ]
  },
  {
    "name": "Settlement Projects",
    "game": "starforged",
    "die": 10,
    "entries": [
      { "min": 1, "max": 1, "text": "Mining" },
      { "min": 2, "max": 2, "text": "Shipbuilding" },
      { "min": 3, "max": 3, "text": "Terraforming research" },
      { "min": 4, "max": 4, "text": "Deep-space survey" },
      { "min": 5, "max": 5, "text": "Subsurface excavation" },
      { "min": 6, "max": 6, "text": "Hydroponics" },
      { "min": 7, "max": 7, "text": "Salvage operations" },
      { "min": 8, "max": 8, "text": "Refueling depot" },
      { "min": 9, "max": 9, "text": "Black-market trade" },
      { "min": 10, "max": 10, "text": "Archive preservation" }
    ]
  },
  {
    "name": "Settlement Trouble",
    "game": "starforged",
    "die": 10,
    "entries": [
      { "min": 1, "max": 1, "text": "Raider threat" },
      { "min": 2, "max": 2, "text": "Dwindling supplies" },
      { "min": 3, "max": 3, "text": "Plague outbreak" },
      { "min": 4, "max": 4, "text": "Leadership feud" },
      { "min": 5, "max": 5, "text": "Sabotaged infrastructure" },
      { "min": 6, "max": 6, "text": "Dangerous discovery" },
      { "min": 7, "max": 7, "text": "Missing people" },
      { "min": 8, "max": 8, "text": "Debt to a power" },
      { "min": 9, "max": 9, "text": "Haunted by the past" },
      { "min": 10, "max": 10, "text": "Machine malfunction" }
    ]
  },
  {
    "name": "Settlement Initial Contact",
    "game": "starforged",
    "die": 10,
    "entries": [
      { "min": 1, "max": 3, "text": "Welcoming" },
      { "min": 4, "max": 6, "text": "Wary" },
      { "min": 7, "max": 8, "text": "Uninterested" },
      { "min": 9, "max": 9, "text": "Hostile" },
      { "min": 10, "max": 10, "text": "Desperate for help" }
    ]
  },
  {
    "name": "Planet Name",
    "game": "starforged",
    "die": 10,
    "entries": [
      { "min": 1, "max": 1, "text": "Achlys" },
      { "min": 2, "max": 2, "text": "Brimstone" },
      { "min": 3, "max": 3, "text": "Cinder" },
      { "min": 4, "max": 4, "text": "Eidolon" },
      { "min": 5, "max": 5, "text": "Firebreak" },
      { "min": 6, "max": 6, "text": "Gloom" },
      { "min": 7, "max": 7, "text": "Ironhome" },
      { "min": 8, "max": 8, "text": "Obsidian" },
      { "min": 9, "max": 9, "text": "Sindri" },
      { "min": 10, "max": 10, "text": "Vesper" }
    ]
  },
  {
    "name": "Planet Class",
    "game": "starforged",
    "die": 10,
    "entries": [
      { "min": 1, "max": 1, "text": "Desert world" },
      { "min": 2, "max": 2, "text": "Furnace world" },
      { "min": 3, "max": 3, "text": "Grave world" },
      { "min": 4, "max": 4, "text": "Ice world" },
      { "min": 5, "max": 5, "text": "Jovian world" },
      { "min": 6, "max": 6, "text": "Jungle world" },
      { "min": 7, "max": 7, "text": "Ocean world" },
      { "min": 8, "max": 8, "text": "Rocky world" },
      { "min": 9, "max": 9, "text": "Shattered world" },
      { "min": 10, "max": 10, "text": "Vital world" }
    ]
  },
  {
    "name": "Planet Observed From Space",
    "game": "starforged",
    "die": 10,
    "entries": [
      { "min": 1, "max": 2, "text": "Swirling high-altitude storms" },
      { "min": 3, "max": 4, "text": "Vast dune seas" },
      { "min": 5, "max": 6, "text": "Fractured ice sheets" },
      { "min": 7, "max": 8, "text": "A world-spanning ocean" },
      { "min": 9, "max": 10, "text": "Dense green canopy" }
    ]
  },
  {
    "name": "Planet Closer Look",
    "game": "starforged",
    "die": 10,
    "entries": [
      { "min": 1, "max": 2, "text": "Towering rock formations" },
      { "min": 3, "max": 4, "text": "An abandoned outpost" },
      { "min": 5, "max": 6, "text": "Strange geometric ruins" },
      { "min": 7, "max": 8, "text": "Vast crater fields" },
      { "min": 9, "max": 10, "text": "Glittering mineral veins" }
    ]
  },
  {
    "name": "Planet Life",
    "game": "starforged",
    "die": 100,
    "entries": [
      { "chance": 25, "text": "Lifeless" },
      { "chance": 50, "text": "Extinct" },
      { "chance": 70, "text": "Simple microbial life" },
      { "chance": 85, "text": "Scattered plant life" },
      { "chance": 95, "text": "Diverse animal life" },
      { "chance": 100, "text": "Intelligent life" }
    ]
  },
  {
    "name": "Derelict",
    "game": "starforged",
    "die": 6,
    "entries": [
      {
        "min": 1, "max": 3, "text": "Wrecked hauler",
        "table": {
          "die": 6,
          "entries": [
            { "min": 1, "max": 2, "text": "Reactor still live" },
            { "min": 3, "max": 4, "text": "Stripped by scavengers" },
            { "min": 5, "max": 6, "text": "Crew still aboard, long dead" }
          ]
        }
      },
      {
        "min": 4, "max": 6, "text": "Silent station",
        "table": {
          "die": 6,
          "entries": [
            { "min": 1, "max": 3, "text": "Power flickers on as you enter" },
            { "min": 4, "max": 6, "text": "Something moved in the dark" }
          ]
        }
      }
    ]
  }
]
"#;

/// Starter asset cards, one of each track kind.
const STARTER_ASSETS: &str = r#"[
  {
    "name": "Hound",
    "category": "Companion",
    "game": "ironsworn",
    "description": "A loyal canine companion.",
    "abilities": [
      { "text": "When you Gather Information with your hound's help, add +1.", "enabled": true },
      { "text": "When your hound fights at your side, inflict +1 harm." }
    ],
    "input_fields": [ { "name": "Name" } ],
    "meter": { "name": "Health", "value": 5, "min": 0, "max": 5 }
  },
  {
    "name": "Sprite",
    "category": "Module",
    "game": "starforged",
    "description": "A detachable scout drone.",
    "abilities": [
      { "text": "When you Explore with your sprite deployed, add +1.", "enabled": true }
    ],
    "toggle": {
      "fields": [
        { "name": "Docked", "active_text": "secured in its bay", "inactive_text": "away", "active": true },
        { "name": "Deployed", "active_text": "ranging ahead", "inactive_text": "grounded", "active": false }
      ]
    }
  },
  {
    "name": "Salvager Rig",
    "category": "Module",
    "game": "starforged",
    "description": "Cutting arms and cargo clamps for breaking down wrecks.",
    "abilities": [
      { "text": "When you strip a derelict for parts, mark salvage.", "enabled": true }
    ],
    "counter": { "name": "Salvage", "value": 0 }
  }
]
"#;

pub fn run(dir: &Path) -> Result<(), String> {
    if dir.exists() {
        return Err(format!("directory '{}' already exists", dir.display()));
    }

    fs::create_dir_all(dir).map_err(|e| format!("cannot create directory: {e}"))?;
    fs::write(dir.join("oracles.json"), STARTER_TABLES)
        .map_err(|e| format!("cannot write oracles.json: {e}"))?;
    fs::write(dir.join(skald_data::ASSET_FILE), STARTER_ASSETS)
        .map_err(|e| format!("cannot write assets.json: {e}"))?;

    println!("Created starter data in {}/", dir.display());
    println!("  oracles.json — prompt tables and the Starforged generator set");
    println!("  assets.json  — a few asset cards");
    println!();
    println!("Get started:");
    println!("  skald list --dir {}", dir.display());
    println!("  skald roll Action --dir {}", dir.display());
    println!("  skald roll \"[Action/Theme]\" --dir {}", dir.display());
    println!("  skald settlement terminus --dir {}", dir.display());
    println!("  skald play --dir {}", dir.display());

    Ok(())
}
