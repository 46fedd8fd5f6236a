use chrono::Local;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dental_core::models::AppointmentStatus;
use dental_core::store::INCIDENTS_KEY;
use dental_core::{views, Appointments, Patients, RecordStore, SessionProvider, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Open the store and seed the demo data on first run
    let config = StoreConfig::from_env();
    let store = RecordStore::open(&config)?;
    store.initialize_defaults()?;
    tracing::info!("store ready at {:?}", config.data_dir);

    // Authenticate with the seeded admin credentials
    let mut sessions = SessionProvider::new(store.clone());
    if !sessions.login("admin@entnt.in", "admin123")? {
        anyhow::bail!("seeded admin credentials rejected");
    }
    let identity = sessions
        .current_user()
        .expect("login succeeded but no session")
        .clone();

    // Load the collections and derive the dashboard projections
    let patients = Patients::new(store.clone()).list()?;
    let appointments = Appointments::new(store.clone()).list()?;
    let (patients, appointments) = views::scope_for_role(&identity, &patients, &appointments);

    let now = Local::now().naive_local();
    let counts = views::status_counts(&appointments);
    let revenue = views::revenue_sum(&appointments, &[AppointmentStatus::Completed]);

    tracing::info!("{} patients on file", patients.len());
    tracing::info!(
        "{} scheduled / {} completed / {} cancelled appointments",
        counts[&AppointmentStatus::Scheduled],
        counts[&AppointmentStatus::Completed],
        counts[&AppointmentStatus::Cancelled],
    );
    tracing::info!("total revenue from completed treatments: ${}", revenue);

    for appointment in views::upcoming_appointments(&appointments, now, 10) {
        tracing::info!(
            "upcoming: {} for {} at {}",
            appointment.title,
            views::resolve_patient_name(&patients, &appointment.patient_id),
            appointment.appointment_date,
        );
    }

    // The demo leaves the snapshot collections exactly as it found them
    let raw: Vec<serde_json::Value> = store.load_collection(INCIDENTS_KEY)?;
    tracing::debug!("{} raw appointment records persisted", raw.len());

    sessions.logout()?;
    Ok(())
}
