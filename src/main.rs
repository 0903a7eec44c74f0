use clap::{Parser, Subcommand, ValueEnum};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::PathBuf;
use std::process;

use unreach::gen::{self, GenParams};
use unreach::graph::Instance;
use unreach::reach::Reporter;

#[derive(Parser)]
#[clap(name = "unreach", about = "Reports which nodes of a directed graph are unreachable from query start nodes")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[clap(about = "Answer the queries of an instance")]
    Run {
        #[clap(long = "in", short = 'i', help = "Instance file, stdin if missing")]
        input: Option<PathBuf>,

        #[clap(long = "out", short = 'o', help = "Result file, stdout if missing")]
        output: Option<PathBuf>,

        #[clap(long = "bincode", default_value_t = false, help = "Decode the instance file as bincode")]
        bincode: bool,

        #[clap(long = "log_dir", short = 'l', help = "Directory for the JSON result log")]
        log_dir: Option<PathBuf>,
    },
    #[clap(about = "Generate random instances")]
    Generate {
        #[clap(short = 'd', long = "gen_dir", help = "Directory to generate instances")]
        g_directory: PathBuf,

        #[clap(long = "ninst", default_value_t = 1, help = "Number of instances to generate")]
        n_instance: usize,

        #[clap(long = "nnode", short = 'n', help = "Number of nodes per instance")]
        n_node: usize,

        #[clap(long = "maxdeg", short = 'e', help = "Maximum out-degree per node")]
        max_degree: usize,

        #[clap(long = "nquery", short = 'q', help = "Number of queries per instance")]
        n_query: usize,

        #[clap(value_enum, long = "target_distrib", default_value_t = TargetDistribution::Uniform, help = "Edge target distribution")]
        target_distribution: TargetDistribution,

        #[clap(long = "bincode", default_value_t = false, help = "Write bincode instead of text instances")]
        bincode: bool,
    },
    Print {
        #[clap(short = 'f', help = "Bincode instance file")]
        file: PathBuf,

        #[clap(long, default_value_t = false, help = "Print the instance as JSON")]
        json: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum TargetDistribution {
    Uniform,
    Zipf,
}

fn read_instance<R: BufRead>(reader: R) -> Instance {
    match Instance::parse(reader) {
        Ok(instance) => instance,
        Err(err) => {
            eprintln!("unreach: {}", err);
            process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { input, output, bincode: bin_instance, log_dir } => {
            let instance = match input {
                Some(path) => {
                    let file = File::open(path).expect("couldn't open instance file");
                    let buf_reader = BufReader::new(file);
                    if bin_instance {
                        let instance: Instance = bincode::deserialize_from(buf_reader)
                            .expect("couldn't decode bincode instance");
                        if let Err(err) = instance.validate() {
                            eprintln!("unreach: {}", err);
                            process::exit(1);
                        }
                        instance
                    } else {
                        read_instance(buf_reader)
                    }
                }
                None => {
                    let stdin = io::stdin();
                    read_instance(stdin.lock())
                }
            };

            let reporter = match log_dir {
                Some(dir) => Reporter::new(&dir),
                None => Reporter::to_stderr(),
            };

            match output {
                Some(path) => {
                    let file = File::create(path).expect("couldn't create result file");
                    let mut buf_writer = BufWriter::new(file);
                    reporter
                        .report(&instance, &mut buf_writer)
                        .expect("writing results went wrong");
                }
                None => {
                    let stdout = io::stdout();
                    reporter
                        .report(&instance, &mut stdout.lock())
                        .expect("writing results went wrong");
                }
            }
        }
        Commands::Generate { g_directory, n_instance, n_node, max_degree, n_query, target_distribution, bincode: bin_output } => {
            if !g_directory.is_dir() {
                fs::create_dir_all(&g_directory).expect("failed to create directory");
            }

            let targets = match target_distribution {
                TargetDistribution::Uniform => gen::distribution::uniform(n_node),
                TargetDistribution::Zipf => gen::distribution::zipf(n_node),
            };

            let params = GenParams {
                n_node,
                max_degree,
                n_query,
                targets: targets.as_ref(),
            };

            for i in 0..n_instance {
                let instance = gen::generate_instance(&params);
                if bin_output {
                    let file = File::create(g_directory.join(format!("inst-{:05}.bincode", i)))
                        .expect("couldn't create bincode file");
                    let buf_writer = BufWriter::new(file);
                    bincode::serialize_into(buf_writer, &instance)
                        .expect("dumping instance to bincode file went wrong");
                } else {
                    let file = File::create(g_directory.join(format!("inst-{:05}.txt", i)))
                        .expect("couldn't create instance file");
                    let mut buf_writer = BufWriter::new(file);
                    gen::write_text(&instance, &mut buf_writer)
                        .expect("dumping instance to text file went wrong");
                }
            }
        }
        Commands::Print { file, json } => {
            let file = File::open(file).expect("couldn't open instance file");
            let buf_reader = BufReader::new(file);
            let instance: Instance = bincode::deserialize_from(buf_reader).unwrap();

            if json {
                println!("{}", serde_json::to_string_pretty(&instance).unwrap());
            } else {
                println!("{:?}", instance);
            }
        }
    }
}
