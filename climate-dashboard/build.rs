use std::env;
use std::fs;
use std::path::Path;

/// Fixture files embedded into the WASM binary, with a one-row fallback each
/// so the app still builds without the fixtures directory.
const FIXTURES: [(&str, &str); 4] = [
    (
        "climate_final.csv",
        "date,city,country,avgtemp_c,maxtemp_c,mintemp_c,month,month_num\n\
         2023-02-14,Berlin,Germany,2.1,7.2,-1.8,Feb,2\n",
    ),
    (
        "df_temp.csv",
        "date,city,country,avgtemp_c,maxtemp_c,mintemp_c,month,month_num\n\
         2023-02-14,Berlin,Germany,2.1,7.2,-1.8,Feb,2\n",
    ),
    ("df_monthly_avg.csv", "month,month_num,Berlin\nFeb,2,2.1\n"),
    (
        "df_monthly_final.csv",
        "month,month_num,city,avgtemp_c,maxtemp_c,mintemp_c\nFeb,2,Berlin,2.1,7.2,-1.8\n",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for (name, fallback) in FIXTURES {
        let src = Path::new("../fixtures").join(name);
        let dest = Path::new(&out_dir).join(name);
        if src.exists() {
            // Fail the build early on a malformed file instead of at page load
            let mut rdr = csv::Reader::from_path(&src).unwrap();
            for record in rdr.records() {
                if let Err(e) = record {
                    panic!("{}: {}", name, e);
                }
            }
            fs::copy(&src, &dest).unwrap();
        } else {
            fs::write(&dest, fallback).unwrap();
        }
        println!("cargo:rerun-if-changed=../fixtures/{}", name);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
