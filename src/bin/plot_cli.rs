#[cfg(target_arch = "wasm32")]
fn main() {
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(err) = native::run() {
        eprintln!("plot_cli error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use graph_engine::geom::ViewportSpec;
    use graph_engine::parse::classify;
    use graph_engine::sampler::{BoundSpec, PlotOptions, plot};
    use std::io::{self, BufWriter, Write};

    const DEFAULT_WIDTH: f64 = 20.0;
    const DEFAULT_CANVAS: (f64, f64) = (400.0, 400.0);

    const USAGE: &str = r"plot_cli (graph-engine)

USAGE:
  plot_cli classify <expression>
  plot_cli sample <expression> [options]

OPTIONS (sample):
  --x-width <W>          Mathematical width of the view (default 20)
  --y-width <H>          Mathematical height of the view (default 20)
  --canvas <WxH>         Canvas size in pixels (default 400x400)
  --offset <DX,DY>       Pixel pan of the view
  --t <START,END>        Parameter interval for `(x(t), y(t))`
  --theta <START,END>    Angle interval for `r = f(theta)`
  --stats                Print sampling diagnostics to stderr
  -h, --help             Show this help
";

    pub fn run() -> Result<(), String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut args = Args::new(args);

        let Some(command) = args.next() else {
            print_usage();
            return Ok(());
        };

        match command.as_str() {
            "classify" => {
                let expression = args.next().ok_or("missing expression")?;
                println!("{}", classify(&expression).kind());
                Ok(())
            }
            "sample" => cmd_sample(&mut args),
            "-h" | "--help" | "help" => {
                print_usage();
                Ok(())
            }
            other => Err(format!("unknown command `{other}`\n\n{USAGE}")),
        }
    }

    fn print_usage() {
        println!("{USAGE}");
    }

    fn cmd_sample(args: &mut Args) -> Result<(), String> {
        let expression = args.next().ok_or("missing expression")?;

        let mut x_width = DEFAULT_WIDTH;
        let mut y_width = DEFAULT_WIDTH;
        let (mut canvas_width, mut canvas_height) = DEFAULT_CANVAS;
        let (mut x_offset, mut y_offset) = (0.0, 0.0);
        let mut options = PlotOptions::default();
        let mut stats = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--x-width" => x_width = parse_number("--x-width", &args.value("--x-width")?)?,
                "--y-width" => y_width = parse_number("--y-width", &args.value("--y-width")?)?,
                "--canvas" => {
                    let value = args.value("--canvas")?;
                    let (w, h) = split_pair(&value, 'x')
                        .ok_or_else(|| format!("--canvas expects WxH, got `{value}`"))?;
                    canvas_width = parse_number("--canvas", w)?;
                    canvas_height = parse_number("--canvas", h)?;
                }
                "--offset" => {
                    let value = args.value("--offset")?;
                    let (dx, dy) = split_pair(&value, ',')
                        .ok_or_else(|| format!("--offset expects DX,DY, got `{value}`"))?;
                    x_offset = parse_number("--offset", dx)?;
                    y_offset = parse_number("--offset", dy)?;
                }
                "--t" => options.t_interval = Some(parse_interval("--t", &args.value("--t")?)?),
                "--theta" => {
                    options.theta_interval = Some(parse_interval("--theta", &args.value("--theta")?)?);
                }
                "--stats" => stats = true,
                "-h" | "--help" => {
                    print_usage();
                    return Ok(());
                }
                other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
            }
        }

        let viewport = ViewportSpec::new(x_width, y_width, canvas_width, canvas_height)
            .with_offset(x_offset, y_offset);
        let output = plot(&viewport, &expression, &options).map_err(|e| e.to_string())?;

        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        for point in &output.points {
            writeln!(out, "{:.3} {:.3}", point.x, point.y).map_err(|e| format!("write: {e}"))?;
        }
        out.flush().map_err(|e| format!("flush: {e}"))?;

        if stats {
            eprintln!("{}", output.diagnostics.summary());
        }
        Ok(())
    }

    fn split_pair(value: &str, separator: char) -> Option<(&str, &str)> {
        let (first, second) = value.split_once(separator)?;
        Some((first.trim(), second.trim()))
    }

    fn parse_number(flag: &str, value: &str) -> Result<f64, String> {
        value
            .parse::<f64>()
            .map_err(|e| format!("invalid number `{value}` for {flag}: {e}"))
    }

    fn parse_interval(flag: &str, value: &str) -> Result<BoundSpec, String> {
        // Split at the first comma; bounds with commas of their own are not supported here.
        split_pair(value, ',')
            .map(|(start, end)| BoundSpec::new(start, end))
            .ok_or_else(|| format!("{flag} expects START,END, got `{value}`"))
    }

    struct Args {
        args: Vec<String>,
        pos: usize,
    }

    impl Args {
        fn new(args: Vec<String>) -> Self {
            Self { args, pos: 0 }
        }

        fn next(&mut self) -> Option<String> {
            let arg = self.args.get(self.pos)?.clone();
            self.pos += 1;
            Some(arg)
        }

        fn value(&mut self, flag: &str) -> Result<String, String> {
            self.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        }
    }
}
