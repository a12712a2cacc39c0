//! Benchmarks for factorscope-model attribution.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use factorscope_model::{FactorAnalyzer, FactorBuilder, FactorRegression};
use factorscope_primitives::{Date, PriceMap, PriceSeries, ReturnSeries, RiskFreeRate};
use factorscope_traits::ReturnsEstimator;
use rand::Rng;

fn random_returns(n: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.r#gen::<f64>() * 0.04 - 0.02).collect()
}

fn dates(n: usize) -> Vec<Date> {
    Date::from_ymd_opt(2015, 1, 2).map(|d| d.iter_days().take(n).collect()).unwrap_or_default()
}

fn random_prices(symbol: &str, n: usize) -> PriceSeries {
    let mut price = 100.0;
    let closes = random_returns(n)
        .into_iter()
        .map(|r| {
            price *= 1.0 + r;
            price
        })
        .collect();
    PriceSeries::new(symbol, dates(n), closes).unwrap()
}

fn bench_regression(c: &mut Criterion) {
    let mut group = c.benchmark_group("factor_regression");

    // Roughly one, four and ten years of trading days
    for n in [252, 1000, 2520] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let market = ReturnSeries::new(dates(n), random_returns(n)).unwrap();
            let asset = ReturnSeries::new(dates(n), random_returns(n)).unwrap();
            let table =
                FactorBuilder::new(RiskFreeRate::default()).build(&market).unwrap().informative();
            let regression = FactorRegression::new();

            b.iter(|| regression.estimate(black_box(&asset), black_box(&table)).unwrap());
        });
    }

    group.finish();
}

fn bench_analyze_asset(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_asset");
    group.sample_size(50);

    for n in [252, 2520] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let prices: PriceMap = [random_prices("SPY", n), random_prices("AAPL", n)]
                .into_iter()
                .map(|s| (s.symbol().clone(), s))
                .collect();
            let mut analyzer = FactorAnalyzer::new(prices);

            b.iter(|| analyzer.analyze_asset(black_box("AAPL")).unwrap());
        });
    }

    group.finish();
}

fn bench_portfolio(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_portfolio");
    group.sample_size(30);

    for n_constituents in [2, 10, 50] {
        group.bench_with_input(
            BenchmarkId::from_parameter(n_constituents),
            &n_constituents,
            |b, &k| {
                let symbols: Vec<String> = (0..k).map(|i| format!("S{i}")).collect();
                let prices: PriceMap = symbols
                    .iter()
                    .map(|s| random_prices(s, 1000))
                    .chain(std::iter::once(random_prices("SPY", 1000)))
                    .map(|s| (s.symbol().clone(), s))
                    .collect();
                let tickers: Vec<&str> = symbols.iter().map(String::as_str).collect();
                let mut analyzer = FactorAnalyzer::new(prices);

                b.iter(|| analyzer.analyze_portfolio(black_box(&tickers), None).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_diagnostics(c: &mut Criterion) {
    let mut group = c.benchmark_group("diagnose");

    for n in [252, 2520] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let series = random_prices("AAPL", n);
            let prices = PriceMap::from([(series.symbol().clone(), series)]);
            let analyzer = FactorAnalyzer::new(prices);

            b.iter(|| analyzer.diagnose(black_box("AAPL")).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_regression,
    bench_analyze_asset,
    bench_portfolio,
    bench_diagnostics
);
criterion_main!(benches);
