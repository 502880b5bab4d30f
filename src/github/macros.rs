#[macro_export]
macro_rules! get {
    ($client:expr, $url:expr) => {{
        use $crate::http::{Headers, ResponseHandler};

        $client
            .http()
            .get($url)
            .default_headers($client.token())
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! post {
    ($client:expr, $url:expr, $body:expr) => {{
        use $crate::http::{Headers, ResponseHandler};

        $client
            .http()
            .post($url)
            .default_headers($client.token())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! delete {
    ($client:expr, $url:expr, $body:expr) => {{
        use $crate::http::{Headers, ResponseHandler};

        $client
            .http()
            .delete($url)
            .default_headers($client.token())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}
