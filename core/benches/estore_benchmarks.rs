use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use estore::{
  store::{InMemoryCartItemRepository, InMemoryProductCatalog},
  Cart, CartItemService, DistinctUntilChanged, NewCartItem, Product,
};
use std::sync::Arc;
use tokio::runtime::Runtime; // To run async code within Criterion

fn product(id: i64) -> Product {
  Product {
    id,
    name: format!("product-{}", id),
    description: None,
    price_cents: 100,
    stock_quantity: 10,
  }
}

// --- Benchmark Functions ---

fn bench_distinct_filter(c: &mut Criterion) {
  let mut group = c.benchmark_group("DistinctUntilChanged");
  for run_length in [1usize, 8, 64].iter() {
    // 1024 polled snapshots, status flipping every `run_length` reads.
    let reads: Vec<Cart> = (0..1024)
      .map(|i| Cart {
        id: Some(1),
        user_id: 1,
        status: format!("status-{}", i / run_length),
      })
      .collect();
    group.throughput(Throughput::Elements(reads.len() as u64));
    group.bench_with_input(BenchmarkId::from_parameter(run_length), &reads, |b, reads| {
      b.iter(|| {
        let mut distinct = DistinctUntilChanged::new();
        reads.iter().cloned().filter_map(|cart| distinct.observe(cart)).count()
      })
    });
  }
  group.finish();
}

fn bench_enrichment_join(c: &mut Criterion) {
  let rt = Runtime::new().unwrap();
  let mut group = c.benchmark_group("CartItemService::list");
  for item_count in [1i64, 10, 100].iter() {
    let catalog = Arc::new(InMemoryProductCatalog::with_products((1..=*item_count).map(product)));
    let service = CartItemService::new(Arc::new(InMemoryCartItemRepository::new()), catalog);
    rt.block_on(async {
      for product_id in 1..=*item_count {
        service.add(1, NewCartItem { product_id, quantity: 1 }).await.unwrap();
      }
    });

    group.throughput(Throughput::Elements(*item_count as u64));
    group.bench_with_input(BenchmarkId::from_parameter(item_count), &service, |b, service| {
      b.to_async(&rt).iter(|| async { service.list(1).await.unwrap() })
    });
  }
  group.finish();
}

criterion_group!(benches, bench_distinct_filter, bench_enrichment_join);
criterion_main!(benches);
