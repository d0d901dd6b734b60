use std::fs;
use std::path::Path;

use stationdata_lib::*;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

const PEDIA: &str = r#"{
    "pages": [
        {"Key": "ThingStructureBattery", "Title": "Station Battery", "PrefabName": "StructureBattery", "PrefabHash": -400115994},
        {"Key": "ThingItemKitAirlock", "Title": "Kit (<N:EN:Airlock>)", "PrefabName": "ItemKitAirlock", "PrefabHash": 964043875},
        {"Key": "GuideIntro", "Title": "Welcome"}
    ],
    "reagents": {},
    "scriptCommands": {
        "yield": {"desc": "Pauses execution for 1 tick.", "example": "yield"},
        "add": {"desc": "Register = a + b.\r\nAdds.", "example": "add r? a(r?|num) b(r?|num)"}
    },
    "scriptConstants": {
        "pi": {"desc": "", "value": "3.14159"}
    }
}"#;

const ENUMS: &str = r#"{
    "scriptEnums": {
        "LogicType": {"values": {
            "Power": {"value": "1", "description": ""},
            "Foo": {"value": "5", "description": "desc"}
        }},
        "LogicSlotType": {"values": {"Occupied": {"value": 2, "description": "held"}}},
        "LogicReagentMode": {"values": {"Contents": {"value": 0, "description": ""}}},
        "LogicBatchMethod": {"values": {
            "Average": {"value": 0, "description": ""},
            "Bar": {"value": "not-a-number", "description": "broken"}
        }}
    },
    "basicEnums": {
        "LogicType": {"values": {
            "Power": {"value": 1, "description": "Whether the device is powered"},
            "Foo": {"value": 5, "description": "desc"}
        }},
        "Color": {"values": {"Blue": {"value": 0, "description": ""}, "Red": {"value": 4, "description": "already"}}},
        "_unnamed": {"values": {"Bare": {"value": 7, "description": ""}}}
    }
}"#;

const PATCHES: &str = r#"{
    "operations": {"yield": "Patched yield help", "missing": "never added"},
    "constants": {"pi": "The ratio of a circle's circumference to its diameter"},
    "batchmodes": {"Average": "Average of all devices"},
    "reagentmodes": {"Contents": ""},
    "enums": {"Color.Blue": "Blue paint", "Color.Red": "overwritten", "Color.Green": "absent"}
}"#;

const LANGUAGE: &str = r#"<Language>
  <Interface>
    <Record><Key>LogicTypePower</Key><Value>Powered (from XML)</Value></Record>
    <Record><Key>LogicTypeNew</Key><Value>Only in XML</Value></Record>
    <Record><Key>ScriptCommandAdd</Key><Value>Adds two values</Value></Record>
  </Interface>
  <Colors><Record><Key>ColorBlue</Key><Value>Blue</Value></Record></Colors>
  <Things><RecordThing><Key>ItemKit</Key><Value>Kit</Value></RecordThing></Things>
</Language>"#;

fn structured_fixture() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "Stationpedia.json", PEDIA);
    write(tmp.path(), "Enums.json", ENUMS);
    write(tmp.path(), "help_patches.json", PATCHES);
    tmp
}

fn run_structured(input: &Path, out: &Path) -> GenerateSummary {
    let options = GenerateOptions::new(out).patches(input.join("help_patches.json"));
    generate(&StructuredExport::from_dir(input), &options).unwrap()
}

#[test]
fn structured_run_writes_all_catalogs() {
    let input = structured_fixture();
    let out = TempDir::new().unwrap();
    let summary = run_structured(input.path(), out.path());

    let names: Vec<_> = summary.written.iter().map(|w| w.file_name).collect();
    assert_eq!(
        names,
        vec![
            "instructions_help.txt",
            "stationpedia.txt",
            "logictypes.txt",
            "slotlogictypes.txt",
            "batchmodes.txt",
            "reagentmodes.txt",
            "enums.txt",
            "constants.txt",
        ]
    );
    assert!(!out.path().join("enum_help.txt").exists());

    assert_eq!(
        read(out.path(), "instructions_help.txt"),
        "add Register = a + b.\\nAdds.\nyield Patched yield help\n"
    );
    assert_eq!(
        read(out.path(), "stationpedia.txt"),
        "964043875 ItemKitAirlock Kit (Airlock)\n-400115994 StructureBattery Station Battery\n"
    );
    assert_eq!(
        read(out.path(), "logictypes.txt"),
        "Foo 5 desc\nPower 1 Whether the device is powered\n"
    );
    assert_eq!(read(out.path(), "slotlogictypes.txt"), "Occupied 2 held\n");
    assert_eq!(
        read(out.path(), "batchmodes.txt"),
        "Average 0 Average of all devices\nBar None broken\n"
    );
    assert_eq!(read(out.path(), "reagentmodes.txt"), "Contents 0 \n");
    assert_eq!(
        read(out.path(), "enums.txt"),
        "Bare 7 \nColor.Blue 0 Blue paint\nColor.Red 4 overwritten\nLogicType.Foo 5 desc\nLogicType.Power 1 Whether the device is powered\n"
    );
    assert_eq!(
        read(out.path(), "constants.txt"),
        "pi 3.14159 The ratio of a circle's circumference to its diameter\n"
    );

    assert_eq!(summary.overlay.collisions, 1);
    assert_eq!(summary.reconcile.descriptions_propagated, 1);
    assert_eq!(summary.reconcile.values_backfilled, 0);
}

#[test]
fn structured_run_is_idempotent() {
    let input = structured_fixture();
    let out = TempDir::new().unwrap();

    run_structured(input.path(), out.path());
    let first: Vec<_> = fs::read_dir(out.path())
        .unwrap()
        .map(|e| {
            let path = e.unwrap().path();
            (path.clone(), fs::read(&path).unwrap())
        })
        .collect();

    run_structured(input.path(), out.path());
    for (path, bytes) in first {
        assert_eq!(fs::read(&path).unwrap(), bytes, "{} changed", path.display());
    }
}

#[test]
fn structured_run_without_patch_file() {
    let input = structured_fixture();
    fs::remove_file(input.path().join("help_patches.json")).unwrap();
    let out = TempDir::new().unwrap();

    let summary = run_structured(input.path(), out.path());
    assert_eq!(summary.overlay.applied, 0);
    assert_eq!(
        read(out.path(), "instructions_help.txt"),
        "add Register = a + b.\\nAdds.\nyield Pauses execution for 1 tick.\n"
    );
}

#[test]
fn malformed_patch_file_is_fatal_before_writing() {
    let input = structured_fixture();
    write(input.path(), "help_patches.json", "[1, 2");
    let out = TempDir::new().unwrap();

    let options = GenerateOptions::new(out.path()).patches(input.path().join("help_patches.json"));
    let err = generate(&StructuredExport::from_dir(input.path()), &options).unwrap_err();
    assert!(matches!(err, PipelineError::Patches { .. }));
    assert!(!out.path().join("enums.txt").exists());
}

#[test]
fn legacy_run_recovers_values_from_prior_enums() {
    let input = structured_fixture();
    let out = TempDir::new().unwrap();
    run_structured(input.path(), out.path());
    let enums_before = read(out.path(), "enums.txt");

    write(input.path(), "english.xml", LANGUAGE);
    let export = LegacyXmlExport::new(input.path().join("english.xml"))
        .with_prior_enums(out.path().join("enums.txt"));
    let summary = generate(&export, &GenerateOptions::new(out.path())).unwrap();

    let names: Vec<_> = summary.written.iter().map(|w| w.file_name).collect();
    assert_eq!(
        names,
        vec![
            "instructions_help.txt",
            "stationpedia.txt",
            "logictypes.txt",
            "slotlogictypes.txt",
            "enum_help.txt",
        ]
    );
    assert_eq!(summary.reconcile.values_backfilled, 2);

    assert_eq!(
        read(out.path(), "logictypes.txt"),
        "Foo 5 \nNew None Only in XML\nPower 1 Powered (from XML)\n"
    );
    assert_eq!(read(out.path(), "slotlogictypes.txt"), "");
    assert_eq!(read(out.path(), "instructions_help.txt"), "add Adds two values\n");
    assert_eq!(read(out.path(), "stationpedia.txt"), "-615878646 ItemKit Kit\n");
    assert_eq!(read(out.path(), "enum_help.txt"), "Color.Blue Blue\n");
    assert_eq!(read(out.path(), "enums.txt"), enums_before);
}

#[test]
fn legacy_run_without_prior_enums() {
    let input = TempDir::new().unwrap();
    write(input.path(), "english.xml", LANGUAGE);
    let out = TempDir::new().unwrap();

    let export = LegacyXmlExport::new(input.path().join("english.xml"))
        .with_prior_enums(out.path().join("enums.txt"));
    generate(&export, &GenerateOptions::new(out.path())).unwrap();
    assert_eq!(
        read(out.path(), "logictypes.txt"),
        "New None Only in XML\nPower None Powered (from XML)\n"
    );
    assert!(!out.path().join("enums.txt").exists());
}

#[test]
fn legacy_run_is_idempotent() {
    let input = structured_fixture();
    let out = TempDir::new().unwrap();
    run_structured(input.path(), out.path());
    write(input.path(), "english.xml", LANGUAGE);

    let export = LegacyXmlExport::new(input.path().join("english.xml"))
        .with_prior_enums(out.path().join("enums.txt"));
    generate(&export, &GenerateOptions::new(out.path())).unwrap();
    let first = read(out.path(), "logictypes.txt");
    generate(&export, &GenerateOptions::new(out.path())).unwrap();
    assert_eq!(read(out.path(), "logictypes.txt"), first);
}

#[test]
fn output_order_does_not_depend_on_input_order() {
    let out_a = TempDir::new().unwrap();
    let out_b = TempDir::new().unwrap();
    let input_a = TempDir::new().unwrap();
    let input_b = TempDir::new().unwrap();

    write(input_a.path(), "Enums.json", r#"{"scriptEnums": {"LogicType": {"values": {
        "Zeta": {"value": 3, "description": ""},
        "Alpha": {"value": 1, "description": ""}
    }}}}"#);
    write(input_b.path(), "Enums.json", r#"{"scriptEnums": {"LogicType": {"values": {
        "Alpha": {"value": 1, "description": ""},
        "Zeta": {"value": 3, "description": ""}
    }}}}"#);
    for input in [&input_a, &input_b] {
        write(input.path(), "Stationpedia.json", "{}");
    }

    generate(&StructuredExport::from_dir(input_a.path()), &GenerateOptions::new(out_a.path())).unwrap();
    generate(&StructuredExport::from_dir(input_b.path()), &GenerateOptions::new(out_b.path())).unwrap();

    let a = read(out_a.path(), "logictypes.txt");
    assert_eq!(a, "Alpha 1 \nZeta 3 \n");
    assert_eq!(a, read(out_b.path(), "logictypes.txt"));
}
