/// Initial catalog and admin account
///
/// Seeding is idempotent: the admin row is upserted (role forced to admin,
/// points reset to zero) and each catalog task is only inserted when no task
/// with the same name exists.

use sqlx::PgPool;
use tracing::{debug, info};

use crate::models::task::{CreateTask, Task};
use crate::models::user::{User, UserRole};

/// Admin id used when `ADMIN_ID` is not set
pub const DEFAULT_ADMIN_ID: &str = "softalpha";

const X_URL: &str = "https://x.com/spicenetio?s=21";
const LINKEDIN_URL: &str = "https://www.linkedin.com/company/spicenet/";
const DISCORD_URL: &str = "https://discord.gg/sTNr3pKpcN";
const CREST_URL: &str = "http://crest-fork.vercel.app";
const SEPOLIA_FAUCET_URL: &str =
    "https://cloud.google.com/application/web3/faucet/ethereum/sepolia";

/// Summary of a seeding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub admin: User,

    /// Tasks inserted by this run
    pub tasks_inserted: usize,

    /// Catalog size after seeding
    pub tasks_total: usize,
}

/// The launch catalog
pub fn default_catalog() -> Vec<CreateTask> {
    let task = |name: &str, kind: &str, points: i32, href: &str, description: &str| CreateTask {
        name: name.to_string(),
        kind: kind.to_string(),
        points,
        href: Some(href.to_string()),
        description: Some(description.to_string()),
    };

    vec![
        task("Follow us on X", "social", 100, X_URL, "Follow @spicenetio on X"),
        task(
            "Follow us on LinkedIn",
            "social",
            100,
            LINKEDIN_URL,
            "Follow SpiceNet on LinkedIn",
        ),
        task(
            "Engage in Community Chat",
            "social",
            200,
            DISCORD_URL,
            "Give feedback on Discord",
        ),
        task(
            "Join SpiceFlow Testnet",
            "tx",
            300,
            CREST_URL,
            "Use the first Spice Flow integration on Crest testnet",
        ),
        task(
            "Get Sepolia ETH",
            "special",
            150,
            SEPOLIA_FAUCET_URL,
            "Fund your wallet via Google Cloud Sepolia faucet",
        ),
    ]
}

/// Upserts the admin account and inserts missing catalog tasks
pub async fn seed(pool: &PgPool, admin_id: &str) -> Result<SeedReport, sqlx::Error> {
    let admin = User::upsert_with_role(pool, admin_id, UserRole::Admin).await?;
    info!(admin_id, "Admin account ready");

    let mut tasks_inserted = 0;
    for entry in default_catalog() {
        if Task::find_by_name(pool, &entry.name).await?.is_some() {
            debug!(name = %entry.name, "Task already present");
            continue;
        }

        let task = Task::create(pool, entry).await?;
        debug!(task_id = task.id, name = %task.name, "Task seeded");
        tasks_inserted += 1;
    }

    let tasks_total = Task::list(pool).await?.len();
    info!(tasks_inserted, tasks_total, "Catalog seeded");

    Ok(SeedReport {
        admin,
        tasks_inserted,
        tasks_total,
    })
}
