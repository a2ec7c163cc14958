//! "Operation Forest Ashes" - arson and a land-grabbing militia
//!
//! An environmental agent investigates a fire that should be impossible: a
//! wet-season rainforest burning. The trail leads from chainsaw marks to a
//! hidden tractor, forged permits, and the militia behind all of it.

use crate::domain::scenario::{
    DecisionClass, EdgeDef, EndingKind, NodeDef, ScenarioDefinition,
};

pub fn definition() -> ScenarioDefinition {
    ScenarioDefinition {
        id: "forest",
        title: "Operation Forest Ashes",
        summary: "A criminal fire and a deforestation militia",
        narrator_brief: "Noir environmental-crime narrator. An agent investigates a suspicious \
                         fire in wet rainforest, uncovering cut trees, a hidden tractor, and a \
                         militia running deforestation, illegal cattle, and forged papers. \
                         Dramatic, tense, clues revealed gradually.",
        entry: "ashes_call",
        nodes: vec![
            NodeDef {
                id: "ashes_call",
                title: "Chapter 1: The Call of the Ashes",
                prompt: "05:47, a dirt road. Fire in wet rainforest during the rainy season; a \
                         natural burn is impossible. Fifteen years of field work say something \
                         is wrong.",
                fallback: "The smoke column rises where no fire should live. Rain fell all \
                           week, yet the understory is burning in neat, deliberate lines. You \
                           kill the engine and listen: no birds, only the tick of cooling \
                           metal somewhere deep in the green.",
                edges: vec![
                    EdgeDef {
                        class: DecisionClass::Examine,
                        keywords: &["investigate", "examine", "inspect", "ashes", "burn"],
                        to: "trail_marks",
                        grants: &["fire_pattern"],
                    },
                    EdgeDef {
                        class: DecisionClass::Question,
                        keywords: &["radio", "call", "ask", "report in", "base"],
                        to: "trail_marks",
                        grants: &["wet_season_alert"],
                    },
                    EdgeDef {
                        class: DecisionClass::Explore,
                        keywords: &[],
                        to: "trail_marks",
                        grants: &[],
                    },
                ],
                ending: None,
            },
            NodeDef {
                id: "trail_marks",
                title: "Chapter 2: Tracks in the Woods",
                prompt: "Past the fire line: stumps cut clean before the burn, sawdust under \
                         the ash. The fire was cover for logging.",
                fallback: "Beyond the scorched strip the truth is plainer: stumps sawn flat, \
                           long before any flame. Sawdust clings beneath the ash like a \
                           confession nobody bothered to hide. Tire ruts, wide and heavy, \
                           run deeper into the forest.",
                edges: vec![
                    EdgeDef {
                        class: DecisionClass::Examine,
                        keywords: &["chainsaw", "cuts", "stumps", "trees", "examine", "inspect"],
                        to: "hidden_tractor",
                        grants: &["chainsaw_marks"],
                    },
                    EdgeDef {
                        class: DecisionClass::Document,
                        keywords: &["photograph", "photo", "document", "record", "evidence"],
                        to: "hidden_tractor",
                        grants: &["field_photos"],
                    },
                    EdgeDef {
                        class: DecisionClass::Explore,
                        keywords: &[],
                        to: "hidden_tractor",
                        grants: &[],
                    },
                ],
                ending: None,
            },
            NodeDef {
                id: "hidden_tractor",
                title: "Chapter 3: The Machine of Destruction",
                prompt: "A camouflaged tractor under cut branches, plates half-removed, a \
                         folder of permits that look wrong. Voices nearby.",
                fallback: "The tractor crouches under hacked branches like an animal told to \
                           wait. Its plates hang loose, half unscrewed. On the seat, a folder: \
                           clearing permits with yesterday's ink and last decade's dates. \
                           Somewhere behind the tree line, men are talking.",
                edges: vec![
                    EdgeDef {
                        class: DecisionClass::Document,
                        keywords: &["document", "photograph", "plates", "serial", "record"],
                        to: "militia_faces",
                        grants: &["forged_permits"],
                    },
                    EdgeDef {
                        class: DecisionClass::Confront,
                        keywords: &["confront", "approach", "stop them", "arrest"],
                        to: "militia_faces",
                        grants: &["militia_sighting"],
                    },
                    EdgeDef {
                        class: DecisionClass::Withdraw,
                        keywords: &["retreat", "hide", "fall back", "leave"],
                        to: "militia_faces",
                        grants: &[],
                    },
                    EdgeDef {
                        class: DecisionClass::Explore,
                        keywords: &[],
                        to: "militia_faces",
                        grants: &[],
                    },
                ],
                ending: None,
            },
            NodeDef {
                id: "militia_faces",
                title: "Chapter 4: Faces of Impunity",
                prompt: "The militia in the open: cattle already grazing on last month's \
                         forest, a local boss who talks about friends in high places.",
                fallback: "They do not even run. Cattle graze where canopy stood a month ago, \
                           and the man giving orders smiles the smile of someone who has \
                           never once been fined. He mentions names. Important names. The \
                           kind that make case files evaporate.",
                edges: vec![
                    EdgeDef {
                        class: DecisionClass::Document,
                        keywords: &["compile", "dossier", "document", "evidence", "photograph"],
                        to: "final_dossier",
                        grants: &["cattle_scheme"],
                    },
                    EdgeDef {
                        class: DecisionClass::Confront,
                        keywords: &["confront", "challenge", "face them"],
                        to: "final_dossier",
                        grants: &["direct_threat"],
                    },
                    EdgeDef {
                        class: DecisionClass::Explore,
                        keywords: &[],
                        to: "final_dossier",
                        grants: &[],
                    },
                ],
                ending: None,
            },
            NodeDef {
                id: "final_dossier",
                title: "Chapter 5: Justice or Silence",
                prompt: "The dossier is complete: photos, permits, plates, names. Handing it \
                         to the prosecutor means making enemies who know where you live.",
                fallback: "The dossier sits on the passenger seat, heavier than paper has any \
                           right to be. Photos, forged permits, the boss's name in your own \
                           handwriting. One road leads to the prosecutor's office. The other \
                           just leads home.",
                edges: vec![
                    EdgeDef {
                        class: DecisionClass::Report,
                        keywords: &["prosecutor", "report", "submit", "justice", "hand over", "file"],
                        to: "justice_served",
                        grants: &["sealed_dossier"],
                    },
                    EdgeDef {
                        class: DecisionClass::Withdraw,
                        keywords: &["silence", "walk away", "drop", "forget"],
                        to: "silenced",
                        grants: &[],
                    },
                    EdgeDef {
                        class: DecisionClass::Explore,
                        keywords: &[],
                        to: "case_shelved",
                        grants: &[],
                    },
                ],
                ending: None,
            },
            NodeDef {
                id: "justice_served",
                title: "Ending: The Law Holds",
                prompt: "The dossier reaches the prosecutor; the militia is indicted under the \
                         environmental crimes law.",
                fallback: "Weeks later the indictment lands like late rain. The tractor is \
                           impounded, the cattle removed, and for once the forest's silence \
                           sounds like rest instead of loss.",
                edges: vec![],
                ending: Some(EndingKind::Positive),
            },
            NodeDef {
                id: "case_shelved",
                title: "Ending: Paper Weather",
                prompt: "The evidence goes in, but without a push the case stalls in a drawer.",
                fallback: "The file is accepted, stamped, and swallowed by a drawer. Maybe \
                           someone reopens it someday. The forest keeps its own records, in \
                           rings and in ash.",
                edges: vec![],
                ending: Some(EndingKind::Neutral),
            },
            NodeDef {
                id: "silenced",
                title: "Ending: The Quiet Road",
                prompt: "The agent walks away; the burning continues next season.",
                fallback: "You take the road home. Next dry season the smoke returns, a \
                           little wider, a little bolder, and this time nobody calls it in.",
                edges: vec![],
                ending: Some(EndingKind::Negative),
            },
        ],
    }
}
