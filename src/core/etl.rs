use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// 依序執行三個階段；任一階段失敗就中止，已寫出的檔案留在磁碟上
    pub fn run(&self) -> Result<String> {
        println!("Starting QR badge batch...");

        // Extract
        println!("Extracting label rows...");
        let rows = self.pipeline.extract()?;
        println!("Extracted {} rows", rows.len());
        self.monitor.log_stats("Extract");

        // Transform
        println!("Generating QR codes...");
        let result = self.pipeline.transform(rows)?;
        println!("Generated {} QR codes", result.records.len());
        self.monitor.log_stats("Transform");

        // Load
        println!("Writing output table...");
        let output_path = self.pipeline.load(result)?;
        println!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
