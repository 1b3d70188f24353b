use chrono::NaiveDate;
use crate::models::{ApiEnvelope, LoginStatistic, StatisticsPayload};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

/// Logins por día de los últimos `days` días
pub async fn login_statistics(api: &ApiClient, days: u32) -> Result<ApiEnvelope<StatisticsPayload>, ApiError> {
    api.get("/loginStatistics/list", &[("days", days.to_string())]).await
}

/// Resumen que muestra el dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSummary {
    /// Registros ordenados por fecha ascendente
    pub records: Vec<LoginStatistic>,
    pub total: u64,
    pub peak: Option<LoginStatistic>,
    pub daily_average: f64,
}

impl StatisticsSummary {
    pub fn from_records(mut records: Vec<LoginStatistic>) -> Self {
        // Fechas no parseables al final, en su orden original
        records.sort_by_key(|r| {
            NaiveDate::parse_from_str(&r.date, "%Y-%m-%d")
                .map(|d| (0, d))
                .unwrap_or((1, NaiveDate::MAX))
        });

        let total: u64 = records.iter().map(|r| r.count).sum();
        let peak = records
            .iter()
            .fold(None::<&LoginStatistic>, |best, r| match best {
                Some(b) if b.count >= r.count => Some(b),
                _ => Some(r),
            })
            .cloned();
        let daily_average = if records.is_empty() {
            0.0
        } else {
            total as f64 / records.len() as f64
        };

        Self { records, total, peak, daily_average }
    }

    pub fn max_count(&self) -> u64 {
        self.peak.as_ref().map(|p| p.count).unwrap_or(0)
    }
}

/// Ancho relativo de la barra de un día (0-100)
pub fn bar_width_percent(count: u64, max: u64) -> u32 {
    if max == 0 {
        return 0;
    }
    ((count.min(max) * 100) / max) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(date: &str, count: u64) -> LoginStatistic {
        LoginStatistic { date: date.to_string(), count }
    }

    #[test]
    fn summary_sorts_and_aggregates() {
        let summary = StatisticsSummary::from_records(vec![
            stat("2024-05-03", 4),
            stat("2024-05-01", 10),
            stat("2024-05-02", 10),
        ]);

        let dates: Vec<_> = summary.records.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-05-01", "2024-05-02", "2024-05-03"]);
        assert_eq!(summary.total, 24);
        assert_eq!(summary.peak, Some(stat("2024-05-01", 10)));
        assert!((summary.daily_average - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unparseable_dates_go_last() {
        let summary = StatisticsSummary::from_records(vec![stat("ayer", 1), stat("2024-01-01", 2)]);
        assert_eq!(summary.records[1].date, "ayer");
    }

    #[test]
    fn empty_summary() {
        let summary = StatisticsSummary::from_records(Vec::new());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.peak, None);
        assert_eq!(summary.max_count(), 0);
        assert_eq!(summary.daily_average, 0.0);
    }

    #[test]
    fn bar_widths() {
        assert_eq!(bar_width_percent(5, 10), 50);
        assert_eq!(bar_width_percent(10, 10), 100);
        assert_eq!(bar_width_percent(3, 0), 0);
    }
}
