// Mon Oct 19 2026 - Alex

use crate::abi::AbiProfile;
use crate::native;
use crate::report::{Fact, Label, ReportResult};
use crate::structure::StructureLayout;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    profile: &'static str,
    facts: Vec<Fact>,
}

impl LayoutReport {
    pub fn profile(&self) -> &'static str {
        self.profile
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    pub fn get(&self, label: Label) -> Option<i64> {
        self.facts.iter().find(|f| f.label == label).map(|f| f.value)
    }

    /// Writes one `<Label> = <value>` line per fact.
    pub fn write_to<W: Write>(&self, mut out: W) -> ReportResult<()> {
        for fact in &self.facts {
            writeln!(out, "{}", fact)?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct LayoutReporter {
    profile: &'static AbiProfile,
}

impl LayoutReporter {
    pub fn new() -> Self {
        Self {
            profile: AbiProfile::current(),
        }
    }

    pub fn collect(&self) -> ReportResult<LayoutReport> {
        log::info!("Collecting layouts for {}", self.profile);

        let mut facts = Vec::with_capacity(Label::ALL.len());

        let stat = native::stat_layout();
        stat.validate()?;
        facts.push(Fact::new(Label::StatSizeOf, stat.size().as_i64()));
        facts.push(Fact::new(Label::StatLongSizeOf, stat.size().in_words() as i64));
        push_offset(&mut facts, &stat, Label::StatOffsetOfStMode, "st_mode")?;
        push_offset(&mut facts, &stat, Label::StatOffsetOfStSize, "st_size")?;
        push_offset(&mut facts, &stat, Label::StatOffsetOfNLink, "st_nlink")?;
        push_offset(&mut facts, &stat, Label::StatOffsetOfStATime, "st_atime")?;
        push_offset(&mut facts, &stat, Label::StatOffsetOfStMTime, "st_mtime")?;
        push_offset(&mut facts, &stat, Label::StatOffsetOfStATimeNsec, "st_atime_nsec")?;
        push_offset(&mut facts, &stat, Label::StatOffsetOfStMTimeNsec, "st_mtime_nsec")?;

        let timespec = native::timespec_layout();
        timespec.validate()?;
        facts.push(Fact::new(Label::TimespecSizeOf, timespec.size().as_i64()));
        push_offset(&mut facts, &timespec, Label::TimespecOffsetOfTvSec, "tv_sec")?;
        push_offset(&mut facts, &timespec, Label::TimespecOffsetOfTvNsec, "tv_nsec")?;

        facts.push(Fact::new(Label::TimeTSizeOf, native::TIME_T_SIZE.as_i64()));

        // Both fit in i32 on every supported target.
        facts.push(Fact::new(Label::UtimeOmit, native::utime_omit()));
        facts.push(Fact::new(Label::UtimeNow, native::utime_now()));

        facts.push(Fact::new(
            Label::FileInfoDirectIoFieldMask,
            native::direct_io_field_mask(),
        ));

        for fact in &facts {
            log::debug!("{}", fact);
        }

        Ok(LayoutReport {
            profile: self.profile.name,
            facts,
        })
    }
}

impl Default for LayoutReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_offset(
    facts: &mut Vec<Fact>,
    layout: &StructureLayout,
    label: Label,
    field: &'static str,
) -> ReportResult<()> {
    let offset = layout.field(field)?.offset();
    facts.push(Fact::new(label, offset.as_i64()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered() -> String {
        let report = LayoutReporter::new().collect().unwrap();
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_labels_in_fixed_order() {
        let text = rendered();
        let labels: Vec<_> = text
            .lines()
            .map(|line| line.split(" = ").next().unwrap())
            .collect();
        let expected: Vec<_> = Label::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_line_shape() {
        for line in rendered().lines() {
            let (label, value) = line.split_once(" = ").unwrap();
            assert!(!label.is_empty());
            assert!(label.chars().all(|c| c.is_ascii_alphabetic() || c == '_'), "{}", line);
            value.parse::<i64>().unwrap();
        }
    }

    #[test]
    fn test_output_is_deterministic() {
        assert_eq!(rendered(), rendered());
    }

    #[test]
    fn test_long_size_rounds_up() {
        let report = LayoutReporter::new().collect().unwrap();
        let size = report.get(Label::StatSizeOf).unwrap();
        let words = report.get(Label::StatLongSizeOf).unwrap();
        assert_eq!(words, (size + 7) / 8);
        assert!(words * 8 >= size && (words - 1) * 8 < size);
    }

    #[test]
    fn test_offsets_within_structures() {
        let report = LayoutReporter::new().collect().unwrap();
        let stat_size = report.get(Label::StatSizeOf).unwrap();
        for label in &Label::ALL[2..9] {
            let offset = report.get(*label).unwrap();
            assert!((0..stat_size).contains(&offset), "{} = {}", label, offset);
        }
        let timespec_size = report.get(Label::TimespecSizeOf).unwrap();
        for label in [Label::TimespecOffsetOfTvSec, Label::TimespecOffsetOfTvNsec] {
            let offset = report.get(label).unwrap();
            assert!((0..timespec_size).contains(&offset), "{} = {}", label, offset);
        }
    }

    #[test]
    fn test_mask_and_sentinels() {
        let report = LayoutReporter::new().collect().unwrap();
        let mask = report.get(Label::FileInfoDirectIoFieldMask).unwrap();
        assert!(mask > 0 && (mask & (mask - 1)) == 0);
        for label in [Label::UtimeOmit, Label::UtimeNow] {
            assert!(i32::try_from(report.get(label).unwrap()).is_ok());
        }
    }

    #[cfg(all(target_os = "linux", target_arch = "x86_64", target_pointer_width = "64"))]
    #[test]
    fn test_linux_x86_64_report() {
        let expected = "\
StatSizeOf = 144
StatLongSizeOf = 18
StatOffsetOfStMode = 24
StatOffsetOfStSize = 48
StatOffsetOfNLink = 16
StatOffsetOfStATime = 72
StatOffsetOfStMTime = 88
StatOffsetOfStATimeNsec = 80
StatOffsetOfStMTimeNsec = 96
TimespecSizeOf = 16
TimespecOffsetOfTvSec = 0
TimespecOffsetOfTvNsec = 8
TimeTSizeOf = 8
UTIME_OMIT = 1073741822
UTIME_NOW = 1073741823
FileInfoDirectIoFieldMask = 2
";
        assert_eq!(rendered(), expected);
    }

    #[test]
    fn test_json_uses_output_labels() {
        let report = LayoutReporter::new().collect().unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["profile"], report.profile());
        assert_eq!(json["facts"].as_array().unwrap().len(), 16);
        assert_eq!(json["facts"][13]["label"], "UTIME_OMIT");
        assert_eq!(json["facts"][0]["label"], "StatSizeOf");
    }
}
