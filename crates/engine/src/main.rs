//! Storefront Engine - demo runner.
//!
//! Lists three games, registers three customers, and walks through a
//! rejected purchase, a successful one and a member discount.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_domain::{
    Category, Country, Customer, DiscountCapability, Email, Game, GameTitle, MembershipLevel,
    Money, PaymentMethod, PremiumDiscountedUser, PremiumGame, PremiumUser, User, Username,
};
use storefront_engine::infrastructure::clock::SystemClock;
use storefront_engine::infrastructure::ports::ClockPort;
use storefront_engine::{App, Storefront, StorefrontConfig};

fn main() -> anyhow::Result<()> {
    storefront_engine::config::load_dotenv();

    let config = StorefrontConfig::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Storefront Engine");

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
    let mut app = App::new(&config, clock);

    run_demo(&mut app)?;

    if let Some(trace) = &app.trace {
        tracing::info!(calls = trace.len(), "Recorded call trace");
        for call in trace.records() {
            println!("{}", call);
        }
    }

    Ok(())
}

fn run_demo(app: &mut App) -> anyhow::Result<()> {
    let counters = Arc::clone(&app.counters);
    let store = &mut app.store;

    let cyberpunk = store.add_game(
        Game::new(
            GameTitle::new("Cyberpunk 2077")?,
            money(60)?,
            Category::new("RPG")?,
            &counters,
        )
        .into(),
    )?;
    store.add_game(
        Game::new(
            GameTitle::new("The Witcher 3")?,
            money(40)?,
            Category::new("RPG")?,
            &counters,
        )
        .into(),
    )?;
    let hades = store.add_game(
        PremiumGame::new(
            GameTitle::new("Hades")?,
            money(20)?,
            Category::new("Action")?,
            true,
            &counters,
        )
        .into(),
    )?;

    let player_one = store.register_user(
        User::new(
            Username::new("player_one")?,
            Email::new("player1@mail.com")?,
            Country::new("USA")?,
            money(50)?,
            &counters,
        )
        .into(),
    )?;
    let elite_gamer = store.register_user(
        PremiumUser::new(
            Username::new("elite_gamer")?,
            Email::new("elite@mail.com")?,
            Country::new("Canada")?,
            money(100)?,
            MembershipLevel::Gold,
            &counters,
        )
        .into(),
    )?;
    let super_elite = store.register_user(
        PremiumDiscountedUser::new(
            Username::new("super_elite")?,
            Email::new("super@mail.com")?,
            Country::new("Germany")?,
            money(100)?,
            MembershipLevel::Gold,
            Decimal::new(15, 2),
            &counters,
        )?
        .into(),
    )?;

    println!("{}", store);
    println!("\nGames:");
    for line in store.list_games() {
        println!("  {}", line);
    }
    println!("\nUsers:");
    for line in store.list_users() {
        println!("  {}", line);
    }

    if let Some(user) = store.user_mut(player_one) {
        user.add_payment_method(PaymentMethod::PayPal);
        println!("\nPayment methods of {}:", user.username());
        for line in user.view_payment_methods() {
            println!("  {}", line);
        }
    }

    println!();
    match store.purchase_game(player_one, cyberpunk) {
        Ok(transaction) => println!("{}", transaction),
        Err(err) => println!("Purchase failed: {}", err),
    }
    match store.purchase_game(elite_gamer, hades) {
        Ok(transaction) => println!("{}", transaction),
        Err(err) => println!("Purchase failed: {}", err),
    }

    if let Some(discount) = store
        .user(super_elite)
        .and_then(|user| user.member_discount())
    {
        let price = money(60)?;
        println!(
            "\nMember price for {}$ at {}% off: {}$",
            price,
            discount.discount_rate().as_percent(),
            discount.apply_discount(price)
        );
    }

    let snapshot = counters.snapshot();
    println!("\nTotal users: {}", snapshot.users);
    println!("Total games: {}", snapshot.games);
    println!("Total transactions: {}", snapshot.transactions);

    Ok(())
}

fn money(amount: i64) -> Result<Money, storefront_domain::DomainError> {
    Money::new(Decimal::from(amount))
}
