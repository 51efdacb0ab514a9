// Mon Oct 19 2026 - Alex

use serde::Serialize;
use std::fmt;

/// Output labels. Spelling and order are what the binding generator parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Label {
    StatSizeOf,
    StatLongSizeOf,
    StatOffsetOfStMode,
    StatOffsetOfStSize,
    StatOffsetOfNLink,
    StatOffsetOfStATime,
    StatOffsetOfStMTime,
    StatOffsetOfStATimeNsec,
    StatOffsetOfStMTimeNsec,
    TimespecSizeOf,
    TimespecOffsetOfTvSec,
    TimespecOffsetOfTvNsec,
    TimeTSizeOf,
    #[serde(rename = "UTIME_OMIT")]
    UtimeOmit,
    #[serde(rename = "UTIME_NOW")]
    UtimeNow,
    FileInfoDirectIoFieldMask,
}

impl Label {
    pub const ALL: [Label; 16] = [
        Label::StatSizeOf,
        Label::StatLongSizeOf,
        Label::StatOffsetOfStMode,
        Label::StatOffsetOfStSize,
        Label::StatOffsetOfNLink,
        Label::StatOffsetOfStATime,
        Label::StatOffsetOfStMTime,
        Label::StatOffsetOfStATimeNsec,
        Label::StatOffsetOfStMTimeNsec,
        Label::TimespecSizeOf,
        Label::TimespecOffsetOfTvSec,
        Label::TimespecOffsetOfTvNsec,
        Label::TimeTSizeOf,
        Label::UtimeOmit,
        Label::UtimeNow,
        Label::FileInfoDirectIoFieldMask,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::StatSizeOf => "StatSizeOf",
            Label::StatLongSizeOf => "StatLongSizeOf",
            Label::StatOffsetOfStMode => "StatOffsetOfStMode",
            Label::StatOffsetOfStSize => "StatOffsetOfStSize",
            Label::StatOffsetOfNLink => "StatOffsetOfNLink",
            Label::StatOffsetOfStATime => "StatOffsetOfStATime",
            Label::StatOffsetOfStMTime => "StatOffsetOfStMTime",
            Label::StatOffsetOfStATimeNsec => "StatOffsetOfStATimeNsec",
            Label::StatOffsetOfStMTimeNsec => "StatOffsetOfStMTimeNsec",
            Label::TimespecSizeOf => "TimespecSizeOf",
            Label::TimespecOffsetOfTvSec => "TimespecOffsetOfTvSec",
            Label::TimespecOffsetOfTvNsec => "TimespecOffsetOfTvNsec",
            Label::TimeTSizeOf => "TimeTSizeOf",
            Label::UtimeOmit => "UTIME_OMIT",
            Label::UtimeNow => "UTIME_NOW",
            Label::FileInfoDirectIoFieldMask => "FileInfoDirectIoFieldMask",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
