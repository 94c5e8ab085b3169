//! Enumerated leaf values of the parsed results tree.
//!
//! Every enum here loads from either its symbolic name (`"SCY"`) or its
//! single-character HY3 code (`"Y"`), and always emits its symbolic name.
//! Anything else is kept as-is by [`crate::model::Leaf`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// An enumerated value with a stable symbolic name.
///
/// The name is the only representation that ever reaches the output
/// document; ordinals and file codes stay internal.
pub trait Symbolic {
    fn name(&self) -> &'static str;
}

/// Pool course the time was swum in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    #[serde(rename = "SCY", alias = "Y")]
    ShortCourseYards,
    #[serde(rename = "SCM", alias = "S")]
    ShortCourseMeters,
    #[serde(rename = "LCM", alias = "L")]
    LongCourseMeters,
}

impl Symbolic for Course {
    fn name(&self) -> &'static str {
        match self {
            Course::ShortCourseYards => "SCY",
            Course::ShortCourseMeters => "SCM",
            Course::LongCourseMeters => "LCM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stroke {
    #[serde(rename = "FREESTYLE", alias = "A")]
    Freestyle,
    #[serde(rename = "BACKSTROKE", alias = "B")]
    Backstroke,
    #[serde(rename = "BREASTSTROKE", alias = "C")]
    Breaststroke,
    #[serde(rename = "BUTTERFLY", alias = "D")]
    Butterfly,
    #[serde(rename = "MEDLEY", alias = "E")]
    Medley,
}

impl Symbolic for Stroke {
    fn name(&self) -> &'static str {
        match self {
            Stroke::Freestyle => "FREESTYLE",
            Stroke::Backstroke => "BACKSTROKE",
            Stroke::Breaststroke => "BREASTSTROKE",
            Stroke::Butterfly => "BUTTERFLY",
            Stroke::Medley => "MEDLEY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "MALE", alias = "M")]
    Male,
    #[serde(rename = "FEMALE", alias = "F")]
    Female,
    #[serde(rename = "MIXED", alias = "X")]
    Mixed,
    #[serde(rename = "UNKNOWN", alias = "U")]
    Unknown,
}

impl Symbolic for Gender {
    fn name(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Mixed => "MIXED",
            Gender::Unknown => "UNKNOWN",
        }
    }
}

/// Age-qualified gender label of an event ("Girls 11-12", "Men Open").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenderAge {
    #[serde(rename = "GIRLS", alias = "G")]
    Girls,
    #[serde(rename = "WOMEN", alias = "W")]
    Women,
    #[serde(rename = "BOYS", alias = "B")]
    Boys,
    #[serde(rename = "MEN", alias = "M")]
    Men,
    #[serde(rename = "MIXED", alias = "X")]
    Mixed,
}

impl Symbolic for GenderAge {
    fn name(&self) -> &'static str {
        match self {
            GenderAge::Girls => "GIRLS",
            GenderAge::Women => "WOMEN",
            GenderAge::Boys => "BOYS",
            GenderAge::Men => "MEN",
            GenderAge::Mixed => "MIXED",
        }
    }
}

/// Sanctioning level of the meet, keyed by the SDIF meet type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeetType {
    #[serde(rename = "INVITATIONAL", alias = "1")]
    Invitational,
    #[serde(rename = "REGIONAL", alias = "2")]
    Regional,
    #[serde(rename = "LSC_CHAMPIONSHIP", alias = "3")]
    LscChampionship,
    #[serde(rename = "ZONE", alias = "4")]
    Zone,
    #[serde(rename = "ZONE_CHAMPIONSHIP", alias = "5")]
    ZoneChampionship,
    #[serde(rename = "NATIONAL_CHAMPIONSHIP", alias = "6")]
    NationalChampionship,
    #[serde(rename = "JUNIORS", alias = "7")]
    Juniors,
    #[serde(rename = "SENIORS", alias = "8")]
    Seniors,
    #[serde(rename = "DUAL", alias = "9")]
    Dual,
    #[serde(rename = "TIME_TRIALS", alias = "0")]
    TimeTrials,
    #[serde(rename = "INTERNATIONAL", alias = "A")]
    International,
    #[serde(rename = "OPEN", alias = "B")]
    Open,
    #[serde(rename = "LEAGUE", alias = "C")]
    League,
}

impl Symbolic for MeetType {
    fn name(&self) -> &'static str {
        match self {
            MeetType::Invitational => "INVITATIONAL",
            MeetType::Regional => "REGIONAL",
            MeetType::LscChampionship => "LSC_CHAMPIONSHIP",
            MeetType::Zone => "ZONE",
            MeetType::ZoneChampionship => "ZONE_CHAMPIONSHIP",
            MeetType::NationalChampionship => "NATIONAL_CHAMPIONSHIP",
            MeetType::Juniors => "JUNIORS",
            MeetType::Seniors => "SENIORS",
            MeetType::Dual => "DUAL",
            MeetType::TimeTrials => "TIME_TRIALS",
            MeetType::International => "INTERNATIONAL",
            MeetType::Open => "OPEN",
            MeetType::League => "LEAGUE",
        }
    }
}

/// Qualifier attached to a recorded time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeCode {
    #[serde(rename = "NORMAL")]
    Normal,
    #[serde(rename = "NO_SHOW", alias = "NS")]
    NoShow,
    #[serde(rename = "DISQUALIFICATION", alias = "DQ")]
    Disqualification,
    #[serde(rename = "SCRATCH", alias = "SCR")]
    Scratch,
    #[serde(rename = "DID_NOT_FINISH", alias = "DNF")]
    DidNotFinish,
}

impl Symbolic for TimeCode {
    fn name(&self) -> &'static str {
        match self {
            TimeCode::Normal => "NORMAL",
            TimeCode::NoShow => "NO_SHOW",
            TimeCode::Disqualification => "DISQUALIFICATION",
            TimeCode::Scratch => "SCRATCH",
            TimeCode::DidNotFinish => "DID_NOT_FINISH",
        }
    }
}

macro_rules! display_by_name {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }
        )*
    };
}

display_by_name!(Course, Stroke, Gender, GenderAge, MeetType, TimeCode);
