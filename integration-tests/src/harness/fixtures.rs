//! Access-log text for end-to-end runs.

/// The four line shapes the parser must reproduce byte for byte: short user
/// agent, long user agent, `"-"` user agent, and a request the load balancer
/// never dispatched.
pub const REFERENCE_LINES: [&str; 4] = [
    "2015-05-13T23:39:43.945958Z my-loadbalancer 192.168.131.39:2817 10.0.0.1:80 0.000073 0.001048 0.000057 200 200 0 29 \"GET http://www.example.com:80/ HTTP/1.1\" \"curl/7.38.0\" - -",
    "2015-07-22T09:00:35.458709Z marketpalce-shop 37.228.105.99:58560 10.0.4.227:80 0.000025 0.003448 0.000018 200 200 0 2048 \"GET https://paytm.com:443/styles/app.css HTTP/1.1\" \"Opera/9.80 (Android; Opera Mini/7.6.40251/37.6066; U; en) Presto/2.12.423 Version/12.16\" ECDHE-RSA-AES128-SHA TLSv1",
    "2015-07-22T09:00:35.821161Z marketpalce-shop 54.251.151.39:44280 10.0.4.244:80 0.00002 0.003225 0.000022 200 200 0 70316 \"GET https://paytm.com:443/sellers/wp-json/posts HTTP/1.1\" \"-\" ECDHE-RSA-AES128-GCM-SHA256 TLSv1.2",
    "2015-07-22T10:34:46.178711Z marketpalce-shop 115.112.62.211:41340 - -1 -1 -1 504 0 0 0 \"POST https://paytm.com:443/shop/log HTTP/1.1\" \"Mozilla/5.0 (compatible; MSIE 9.0; Windows NT 6.1; Trident/5.0)\" ECDHE-RSA-AES128-SHA TLSv1",
];

/// A dispatched `GET https://paytm.com:443{path}` from `client` at `timestamp`.
pub fn log_line(timestamp: &str, client: &str, path: &str) -> String {
    format!(
        "{timestamp} marketpalce-shop {client}:54635 10.0.6.158:80 0.000022 0.026109 0.00002 200 200 0 699 \
         \"GET https://paytm.com:443{path} HTTP/1.1\" \
         \"Mozilla/5.0 (Windows NT 6.1; rv:39.0) Gecko/20100101 Firefox/39.0\" \
         ECDHE-RSA-AES128-GCM-SHA256 TLSv1.2"
    )
}

/// Request line is missing its closing quote.
pub const UNTERMINATED_REQUEST: &str = "2015-07-22T09:10:00.000000Z marketpalce-shop 1.186.41.1:80 - -1 -1 -1 504 0 0 0 \"GET https://paytm.com:443/ HTTP/1.1";

/// Three clients over one morning, in arrival order, with one malformed line
/// at position 5.
///
/// * `123.242.248.130`: 300 s, then a 900.000001 s gap that opens session 2,
///   then 600 s.
/// * `1.39.32.59`: exactly 900 s apart, so one session.
/// * `54.251.151.39`: a single request.
pub fn morning_batch() -> Vec<String> {
    vec![
        log_line("2015-07-22T09:00:00.000000Z", "123.242.248.130", "/shop/a"),
        log_line("2015-07-22T09:00:10.000000Z", "1.39.32.59", "/x"),
        log_line("2015-07-22T09:03:00.000000Z", "54.251.151.39", "/solo"),
        log_line("2015-07-22T09:05:00.000000Z", "123.242.248.130", "/shop/b"),
        UNTERMINATED_REQUEST.to_string(),
        log_line("2015-07-22T09:15:10.000000Z", "1.39.32.59", "/x"),
        log_line("2015-07-22T09:20:00.000001Z", "123.242.248.130", "/shop/a"),
        log_line("2015-07-22T09:30:00.000001Z", "123.242.248.130", "/shop/c"),
    ]
}
