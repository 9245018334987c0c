//! Text and JSON presentation of core results

use crate::artwork::artwork_for;
use cohort_core::{ClusterOverview, Distribution, IntegrityReport, PeerGroupReport};
use cohort_types::Category;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Widest bar in a chart, in characters
const BAR_WIDTH: usize = 30;

/// Report as printed with `--json`
#[derive(Debug, Serialize)]
pub struct ReportView<'a> {
    #[serde(flatten)]
    pub report: &'a PeerGroupReport,
    pub artwork: &'static str,
}

impl<'a> ReportView<'a> {
    #[must_use]
    pub fn new(report: &'a PeerGroupReport) -> Self {
        Self {
            report,
            artwork: artwork_for(&report.profile.name),
        }
    }
}

/// Horizontal bar chart of a distribution
#[must_use]
pub fn bar_chart<C: Category>(title: &str, distribution: &Distribution<C>) -> String {
    BarChart { title, distribution }.to_string()
}

/// Full text report
#[must_use]
pub fn report_text(report: &PeerGroupReport) -> String {
    ReportText(report).to_string()
}

/// Cluster listing
#[must_use]
pub fn overview_text(rows: &[ClusterOverview]) -> String {
    OverviewText(rows).to_string()
}

/// Integrity check summary
#[must_use]
pub fn integrity_text(report: &IntegrityReport) -> String {
    IntegrityText(report).to_string()
}

struct BarChart<'a, C: Category> {
    title: &'a str,
    distribution: &'a Distribution<C>,
}

impl<C: Category> Display for BarChart<'_, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if self.distribution.is_empty() {
            return writeln!(f, "  (brak danych)");
        }

        let label_width = self
            .distribution
            .iter()
            .map(|(c, _)| c.as_str().chars().count())
            .max()
            .unwrap_or(0);
        let max = self.distribution.iter().map(|(_, n)| n).max().unwrap_or(1).max(1);

        for (category, count) in self.distribution.iter() {
            let len = (count * BAR_WIDTH).div_ceil(max);
            writeln!(
                f,
                "  {:<label_width$}  {} {count}",
                category.as_str(),
                "█".repeat(len)
            )?;
        }
        Ok(())
    }
}

struct ReportText<'a>(&'a PeerGroupReport);

impl Display for ReportText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let stats = &report.statistics;

        writeln!(f, "Najbliżej Ci do grupy {}", report.profile.name)?;
        writeln!(f, "{}", report.profile.description)?;
        writeln!(f, "{}", artwork_for(&report.profile.name))?;
        writeln!(f)?;
        writeln!(f, "Liczba osób w grupie: {}", stats.total)?;
        writeln!(f, "Liczba mężczyzn: {}", stats.men())?;
        writeln!(f, "Liczba kobiet: {}", stats.women())?;

        for chart in [
            bar_chart("Rozkład wieku w grupie", &stats.age),
            bar_chart("Rozkład wykształcenia", &stats.edu_level),
            bar_chart("Ulubione zwierzęta w grupie", &stats.fav_animals),
            bar_chart("Ulubione miejsce", &stats.fav_place),
            bar_chart("Rozkład płci", &stats.gender),
        ] {
            write!(f, "\n{chart}")?;
        }
        Ok(())
    }
}

struct OverviewText<'a>(&'a [ClusterOverview]);

impl Display for OverviewText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let id_width = self
            .0
            .iter()
            .map(|r| r.cluster_id.as_str().chars().count())
            .max()
            .unwrap_or(0);

        for row in self.0 {
            let name = row.profile.as_ref().map_or("(brak opisu)", |p| p.name.as_str());
            writeln!(
                f,
                "{:<id_width$}  {:>5}  {name}",
                row.cluster_id.as_str(),
                row.size
            )?;
        }
        Ok(())
    }
}

struct IntegrityText<'a>(&'a IntegrityReport);

impl Display for IntegrityText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "model:        {}", report.model.short())?;
        writeln!(f, "clusters:     {}", report.labels.len())?;
        writeln!(f, "profiles:     {}", report.profiles)?;
        writeln!(f, "respondents:  {}", report.respondents)?;
        if !report.unused_profiles.is_empty() {
            let unused: Vec<_> = report.unused_profiles.iter().map(|id| id.as_str()).collect();
            writeln!(f, "unused:       {}", unused.join(", "))?;
        }
        writeln!(f, "status:       OK")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cohort_core::ClusterStatistics;
    use cohort_types::{
        AgeBracket, ClusterId, ClusterProfile, EduLevel, FavAnimals, FavPlace, Gender,
        ModelFingerprint, SurveyRecord,
    };
    use pretty_assertions::assert_eq;

    fn sample_report() -> PeerGroupReport {
        let query = SurveyRecord::new(
            AgeBracket::From25To34,
            EduLevel::Higher,
            FavAnimals::Dogs,
            FavPlace::InTheMountains,
            Gender::Female,
        );
        PeerGroupReport {
            query,
            cluster_id: ClusterId::from("Cluster 1"),
            profile: ClusterProfile::new("Górscy Mędrcy", "Lubią góry."),
            statistics: ClusterStatistics {
                cluster_id: ClusterId::from("Cluster 1"),
                total: 3,
                gender: Distribution::from_values([Gender::Female, Gender::Female, Gender::Male]),
                age: Distribution::from_values([AgeBracket::From25To34; 3]),
                edu_level: Distribution::from_values([EduLevel::Higher; 3]),
                fav_animals: Distribution::from_values([FavAnimals::Dogs; 3]),
                fav_place: Distribution::from_values([FavPlace::InTheMountains; 3]),
            },
            model: ModelFingerprint::compute(b"model"),
        }
    }

    #[test]
    fn bar_chart_scales_to_largest() {
        let chart = bar_chart(
            "Rozkład płci",
            &Distribution::from_values([Gender::Female, Gender::Female, Gender::Male]),
        );
        let lines: Vec<_> = chart.lines().collect();
        assert_eq!(lines[0], "Rozkład płci");
        assert_eq!(lines[1], format!("  Mężczyzna  {} 1", "█".repeat(15)));
        assert_eq!(lines[2], format!("  Kobieta    {} 2", "█".repeat(30)));
    }

    #[test]
    fn empty_chart_says_so() {
        let chart = bar_chart("Ulubione miejsce", &Distribution::<FavPlace>::default());
        assert_eq!(chart, "Ulubione miejsce\n  (brak danych)\n");
    }

    #[test]
    fn report_text_has_metrics_and_artwork() {
        let text = report_text(&sample_report());
        assert!(text.starts_with("Najbliżej Ci do grupy Górscy Mędrcy\n"));
        assert!(text.contains("Liczba osób w grupie: 3"));
        assert!(text.contains("Liczba mężczyzn: 1"));
        assert!(text.contains("Liczba kobiet: 2"));
        assert!(text.contains("medrzec"));
    }

    #[test]
    fn json_view_flattens_report() {
        let report = sample_report();
        let value = serde_json::to_value(ReportView::new(&report)).unwrap();
        assert_eq!(value["cluster_id"], "Cluster 1");
        assert_eq!(value["statistics"]["gender"]["Kobieta"], 2);
        assert_eq!(value["query"]["fav_place"], "W górach");
        assert!(value["artwork"].as_str().unwrap().contains("medrzec"));
    }

    #[test]
    fn report_text_lists_charts_after_metrics() {
        let text = report_text(&sample_report());
        let metrics = text.find("Liczba kobiet: 2").unwrap();
        let age = text.find("\nRozkład wieku w grupie\n").unwrap();
        let gender = text.find("\nRozkład płci\n").unwrap();
        assert!(metrics < age && age < gender);
        assert!(text.ends_with(&format!("  Kobieta    {} 2\n", "█".repeat(30))));
    }

    #[test]
    fn overview_marks_missing_profiles() {
        let rows = vec![
            ClusterOverview {
                cluster_id: ClusterId::from("Cluster 0"),
                profile: Some(ClusterProfile::new("Wodni Psiarze", "")),
                size: 12,
            },
            ClusterOverview {
                cluster_id: ClusterId::from("Cluster 10"),
                profile: None,
                size: 0,
            },
        ];
        assert_eq!(
            overview_text(&rows),
            "Cluster 0      12  Wodni Psiarze\nCluster 10      0  (brak opisu)\n"
        );
    }
}
