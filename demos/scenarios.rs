//! Purchase Scenarios
//!
//! This example replays a sequence of customer sessions against the
//! reference machine, printing every message the machine shows.
//!
//! Key concepts:
//! - Overpayment paid back as greedy change
//! - Buying a product that has sold out
//! - Paying in several coins until the balance crosses zero
//! - The remaining coin inventory after each session
//!
//! Set `RUST_LOG=vending_machine=debug` to see state transitions.
//!
//! Run with: cargo run --example scenarios

use tracing_subscriber::{fmt, EnvFilter};
use vending_machine::display::ConsoleSink;
use vending_machine::VendingMachine;

fn print_coins(machine: &VendingMachine<ConsoleSink>) {
    println!("\nCoins available for change:");
    println!("{}", machine.denomination_report());
}

fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Purchase Scenarios ===\n");

    let mut machine = VendingMachine::new(ConsoleSink);
    print_coins(&machine);

    println!("\n--- Buy a Coke with two 50P coins ---");
    machine.select_product("Coke");
    machine.insert_coin(50);
    machine.insert_coin(50);
    print_coins(&machine);

    println!("\n--- Try to buy another Coke ---");
    machine.select_product("Coke");
    machine.insert_coin(50);
    machine.insert_coin(50);
    print_coins(&machine);

    println!("\n--- Buy a Tango in 50P and 20P coins ---");
    machine.select_product("Tango");
    machine.insert_coin(50);
    for _ in 0..6 {
        machine.insert_coin(20);
    }
    print_coins(&machine);

    println!("\n--- Change our mind about a Sprite ---");
    machine.select_product("Sprite");
    machine.insert_coin(20);
    machine.eject_coin();

    println!("\n=== Summary ===");
    println!("Final state: {}", machine.state());
    println!("Items left: {}", machine.total_item_count());
    println!("State path:");
    for state in machine.history().get_path() {
        println!("  {state}");
    }
}
