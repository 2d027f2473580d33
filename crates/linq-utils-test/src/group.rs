use linq_utils::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Order {
  customer: &'static str,
  region: Region,
  total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Region {
  North,
  South,
}

fn order(customer: &'static str, region: Region, total: f64) -> Order {
  Order {
    customer,
    region,
    total,
  }
}

fn orders() -> Vec<Order> {
  vec![
    order("ann", Region::North, 10.0),
    order("bob", Region::South, 2.5),
    order("ann", Region::South, 4.0),
    order("cid", Region::North, 10.0),
    order("bob", Region::South, 1.5),
  ]
}

#[test]
fn test_composite_key() {
  let l = orders();
  let by_hash = l.group_by(|o| (o.customer, o.region));
  let by_eq = l.group_by_eq(|o| (o.customer, o.region));
  assert_eq!(by_hash, by_eq);
  assert_eq!(
    by_hash.iter().map(|g| g.key).collect::<Vec<_>>(),
    vec![
      ("ann", Region::North),
      ("bob", Region::South),
      ("ann", Region::South),
      ("cid", Region::North),
    ]
  );
  assert_eq!(by_hash[1].array, vec![&l[1], &l[4]]);
}

#[test]
fn test_float_key() {
  let l = orders();
  let groups = l.group_by_eq(|o| o.total);
  assert_eq!(groups.len(), 4);
  assert_eq!(groups[0].key, 10.0);
  assert_eq!(groups[0].array.select(|o| o.customer), vec!["ann", "cid"]);
}

#[test]
fn test_group_totals() {
  let totals: Vec<(Region, f64)> = orders()
    .group_by_key(|o| o.region)
    .into_iter()
    .map(|g| {
      let sum = g.array.sum_by(|o| o.total).unwrap_or_default();
      (g.key, sum)
    })
    .collect();
  assert_eq!(totals, vec![(Region::North, 20.0), (Region::South, 8.0)]);
}

#[test]
fn test_duplicate_customers() {
  let l = orders();
  let dups: Vec<&str> = l
    .group_by(|o| o.customer)
    .into_iter()
    .filter(|g| g.len() > 1)
    .map(|g| g.key)
    .collect();
  assert_eq!(dups, vec!["ann", "bob"]);
  assert_eq!(
    l.distinct_by(|a, b| a.customer == b.customer)
      .select(|o| o.customer),
    vec!["ann", "bob", "cid"]
  );
}
