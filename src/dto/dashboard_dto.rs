use serde::Serialize;

// Contadores agregados del dashboard
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsResponse {
    pub total_cars: i64,
    pub available_cars: i64,
    pub total_customers: i64,
    pub active_rentals: i64,
    pub completed_rentals: i64,
    pub cancelled_rentals: i64,
    pub overdue_rentals: i64,
    pub total_revenue_cents: i64,
}

// Ingresos de reservas COMPLETED agrupados por mes
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyEarningsResponse {
    pub month: String,
    pub completed_rentals: i64,
    pub revenue_cents: i64,
}
