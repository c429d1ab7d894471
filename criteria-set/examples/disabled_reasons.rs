use anyhow::Context;
use criteria_set::CriteriaSet;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum DisabledReason {
    Offline,
    Maintenance,
    MissingPermission,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut disabled = CriteriaSet::new();
    disabled.insert(DisabledReason::Offline);
    disabled.insert(DisabledReason::Maintenance);
    disabled.insert(DisabledReason::Offline);

    println!("disabled: {} {disabled:?}", disabled == true);
    println!(
        "missing permission: {}",
        disabled.has(&DisabledReason::MissingPermission)
    );

    disabled.erase(&DisabledReason::Offline);
    disabled.erase(&DisabledReason::Maintenance);

    disabled
        .ensure_clear()
        .context("button should be enabled once every reason is resolved")?;
    println!("enabled");

    Ok(())
}
