//! Connection handle and query execution
//!
//! One long-lived connection is opened at startup, owned by the
//! orchestrator, and dropped on exit. The workload is read-only and
//! strictly sequential, so there is no pooling and no transaction
//! handling.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tiberius::{AuthMethod, Client, ColumnData, FromSql};
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

use crate::config::Config;
use crate::observability::Logger;

use super::errors::{DbError, DbResult};
use super::result::ResultSet;
use super::value::Cell;

/// All listings live in the Xtendis index database
const DATABASE_NAME: &str = "X10DBASE";
const DEFAULT_PORT: u16 = 1433;

/// Live connection to the source SQL Server
pub struct Database {
    client: Client<Compat<TcpStream>>,
    server: String,
}

impl Database {
    /// Open the connection described by the configuration
    pub async fn connect(settings: &Config) -> DbResult<Self> {
        let (host, port) = split_server(&settings.database_server);

        let mut config = tiberius::Config::new();
        config.host(host);
        config.port(port);
        config.database(DATABASE_NAME);
        config.authentication(AuthMethod::sql_server(
            &settings.database_username,
            &settings.database_password,
        ));
        config.trust_cert();

        let tcp = TcpStream::connect(config.get_addr())
            .await
            .map_err(|e| DbError::Network {
                server: settings.database_server.clone(),
                source: e,
            })?;
        tcp.set_nodelay(true).map_err(|e| DbError::Network {
            server: settings.database_server.clone(),
            source: e,
        })?;

        let client = Client::connect(config, tcp.compat_write())
            .await
            .map_err(|e| DbError::Connect {
                server: settings.database_server.clone(),
                source: e,
            })?;

        Logger::info("DATABASE_CONNECTED", &[("server", &settings.database_server)]);

        Ok(Self {
            client,
            server: settings.database_server.clone(),
        })
    }

    /// Execute a query and materialize the full result
    ///
    /// Field names come from the result descriptor; rows are fetched
    /// eagerly. Execution errors surface unmodified with the query text
    /// attached.
    pub async fn query(&mut self, sql: &str) -> DbResult<ResultSet> {
        Logger::debug("QUERY_EXECUTE", &[("server", &self.server), ("query", sql)]);

        let stream = self
            .client
            .simple_query(sql)
            .await
            .map_err(|e| DbError::Query {
                query: sql.to_string(),
                source: e,
            })?;

        let mut result_sets = stream.into_results().await.map_err(|e| DbError::Query {
            query: sql.to_string(),
            source: e,
        })?;

        let raw_rows = if result_sets.is_empty() {
            Vec::new()
        } else {
            result_sets.swap_remove(0)
        };

        let fields: Vec<String> = raw_rows
            .first()
            .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
            .unwrap_or_default();

        let mut rows = Vec::with_capacity(raw_rows.len());
        for row in raw_rows {
            let mut cells = Vec::with_capacity(fields.len());
            for value in row.into_iter() {
                cells.push(cell_from_column(value)?);
            }
            rows.push(cells);
        }

        Ok(ResultSet::new(fields, rows))
    }
}

/// Split "host" or "host,port" into its parts
fn split_server(server: &str) -> (&str, u16) {
    match server.split_once(',') {
        Some((host, port)) => (host, port.trim().parse().unwrap_or(DEFAULT_PORT)),
        None => (server, DEFAULT_PORT),
    }
}

/// Convert one wire value into a [`Cell`]
fn cell_from_column(data: ColumnData<'static>) -> DbResult<Cell> {
    let cell = match data {
        ColumnData::Bit(v) => v.map(Cell::Bool).unwrap_or(Cell::Null),
        ColumnData::U8(v) => v.map(|x| Cell::Int(i64::from(x))).unwrap_or(Cell::Null),
        ColumnData::I16(v) => v.map(|x| Cell::Int(i64::from(x))).unwrap_or(Cell::Null),
        ColumnData::I32(v) => v.map(|x| Cell::Int(i64::from(x))).unwrap_or(Cell::Null),
        ColumnData::I64(v) => v.map(Cell::Int).unwrap_or(Cell::Null),
        ColumnData::F32(v) => v.map(|x| Cell::Float(f64::from(x))).unwrap_or(Cell::Null),
        ColumnData::F64(v) => v.map(Cell::Float).unwrap_or(Cell::Null),
        ColumnData::String(v) => v
            .map(|x| Cell::Text(x.into_owned()))
            .unwrap_or(Cell::Null),
        ColumnData::Guid(v) => v.map(Cell::Guid).unwrap_or(Cell::Null),
        ColumnData::Numeric(v) => v
            .map(|x| Cell::Decimal(x.to_string()))
            .unwrap_or(Cell::Null),
        ColumnData::Binary(v) => v
            .map(|x| Cell::Bytes(x.into_owned()))
            .unwrap_or(Cell::Null),
        ColumnData::Xml(v) => v
            .map(|x| Cell::Text(x.into_owned().to_string()))
            .unwrap_or(Cell::Null),
        ColumnData::Date(_) => NaiveDate::from_sql(&data)
            .map_err(|e| DbError::Conversion(e.to_string()))?
            .map(Cell::Date)
            .unwrap_or(Cell::Null),
        ColumnData::Time(_) => NaiveTime::from_sql(&data)
            .map_err(|e| DbError::Conversion(e.to_string()))?
            .map(Cell::Time)
            .unwrap_or(Cell::Null),
        ColumnData::DateTime(_) | ColumnData::SmallDateTime(_) | ColumnData::DateTime2(_) => {
            NaiveDateTime::from_sql(&data)
                .map_err(|e| DbError::Conversion(e.to_string()))?
                .map(Cell::DateTime)
                .unwrap_or(Cell::Null)
        }
        ColumnData::DateTimeOffset(_) => DateTime::<Utc>::from_sql(&data)
            .map_err(|e| DbError::Conversion(e.to_string()))?
            .map(|dt| Cell::DateTime(dt.naive_utc()))
            .unwrap_or(Cell::Null),
    };

    Ok(cell)
}
