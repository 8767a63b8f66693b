use std::time::Duration;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Option<Self> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optopt(
            "",
            "delay",
            "delay between frames in seconds (defaults to 0.1)",
            "SECONDS",
        );
        opts.optopt(
            "",
            "alive",
            "character used for living cells (defaults to \"#\")",
            "CHAR",
        );
        opts.optopt(
            "",
            "dead",
            "character used for dead cells (defaults to \" \")",
            "CHAR",
        );

        let matches = opts.parse(args.iter().map(T::as_ref)).unwrap();
        if matches.opt_present("help") || matches.free.is_empty() {
            println!("{}", opts.usage("usage: sparselife <worldfile> [options]"));
            None
        } else {
            Some(Self { matches })
        }
    }
    pub fn from_env() -> Option<Self> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    pub fn worldfile(&self) -> &str {
        // `new` rejects an empty free-argument list
        &self.matches.free[0]
    }

    pub fn delay(&self) -> Duration {
        let seconds: f64 = self.matches.opt_get("delay").unwrap().unwrap_or(0.1);
        Duration::from_secs_f64(seconds.max(0.0))
    }

    pub fn alive_char(&self) -> char {
        self.opt_char("alive").unwrap_or('#')
    }
    pub fn dead_char(&self) -> char {
        self.opt_char("dead").unwrap_or(' ')
    }

    fn opt_char(&self, name: &str) -> Option<char> {
        self.matches.opt_str(name).and_then(|s| s.chars().next())
    }
}
