#[macro_use]
extern crate log;
extern crate env_logger;

use std::{fs::File, path::PathBuf, sync::Arc, time::Instant};

use env_logger::Env;
use structopt::StructOpt;

use farecard::{
    io::{print_prices, print_results, read_csv_data},
    model::{card::Card, fare::FareSchedule, Amount, RideCount},
};

fn main() {
    //read cli arguments
    let opt = Opt::from_args();
    //init logger
    let log_level = if opt.debug { "debug" } else { "error" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let schedule = match opt.commercial_price {
        Some(price) => match FareSchedule::with_commercial_price(price) {
            Ok(schedule) => schedule,
            Err(e) => {
                error!("can't configure fares: {}", e);
                return;
            }
        },
        None => FareSchedule::new(),
    };

    let mut card = match Card::restore(Arc::new(schedule), opt.balance, opt.ground, opt.subway) {
        Ok(card) => card,
        Err(e) => {
            error!("can't create card: {}", e);
            return;
        }
    };

    let input_file = match File::open(opt.input) {
        Ok(f) => f,
        Err(e) => {
            error!("can't open file: {:?}", e);
            return;
        }
    };

    let start = Instant::now();
    read_csv_data(input_file, &mut card);
    print_results(std::io::stdout(), &card);
    if opt.prices {
        print_prices(std::io::stdout(), card.schedule());
    }
    debug!("processed in {:?}", start.elapsed());
}

#[derive(StructOpt)]
#[structopt(name = "farecard")]
struct Opt {
    #[structopt(short, long)]
    pub debug: bool,
    /// starting balance of the card
    #[structopt(short, long, default_value = "0", allow_hyphen_values = true)]
    balance: Amount,
    /// ground rides already taken this cycle
    #[structopt(long, default_value = "0")]
    ground: RideCount,
    /// subway rides already taken this cycle
    #[structopt(long, default_value = "0")]
    subway: RideCount,
    /// price of a commercial ride
    #[structopt(short, long, allow_hyphen_values = true)]
    commercial_price: Option<Amount>,
    /// print the monthly price table after the card state
    #[structopt(short, long)]
    prices: bool,
    #[structopt(name = "FILE", parse(from_os_str))]
    input: PathBuf,
}
