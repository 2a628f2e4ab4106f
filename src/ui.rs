pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Sky Ledger</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f3f6fb;
      --bg-2: #cfdcf5;
      --ink: #23272f;
      --accent: #e8a33d;
      --accent-2: #31486b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(49, 72, 107, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e7eefb 60%, #f4f7fc 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.5rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5d6474;
      font-size: 1rem;
    }

    .clients {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    .client-chip {
      appearance: none;
      border: 1px solid rgba(49, 72, 107, 0.18);
      background: white;
      border-radius: 999px;
      padding: 10px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
    }

    .client-chip.active {
      background: var(--accent-2);
      color: white;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 16px;
      border: 1px solid rgba(49, 72, 107, 0.08);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8a8f9c;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    table {
      width: 100%;
      border-collapse: collapse;
      background: white;
      border-radius: 18px;
      overflow: hidden;
      border: 1px solid rgba(49, 72, 107, 0.08);
    }

    th, td {
      text-align: left;
      padding: 10px 14px;
      font-size: 0.92rem;
      border-bottom: 1px solid rgba(49, 72, 107, 0.08);
    }

    th {
      background: rgba(49, 72, 107, 0.06);
      text-transform: uppercase;
      letter-spacing: 0.08em;
      font-size: 0.75rem;
      color: #6b7180;
    }

    .delta-up { color: #2d7a4b; font-weight: 600; }
    .delta-down { color: #c63b2b; font-weight: 600; }

    .status {
      font-size: 0.95rem;
      color: #6b7180;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Sky Ledger</h1>
      <p class="subtitle">Daily candle runs per client. Pick a client to see their history.</p>
    </header>

    <section class="clients" id="clients"></section>

    <section class="panel">
      <div class="stat">
        <span class="label">Records</span>
        <span class="value" id="stat-records">0</span>
      </div>
      <div class="stat">
        <span class="label">Total candles</span>
        <span class="value" id="stat-candles">0</span>
      </div>
      <div class="stat">
        <span class="label">Seasonal</span>
        <span class="value" id="stat-seasonal">0</span>
      </div>
      <div class="stat">
        <span class="label">Avg candles/day</span>
        <span class="value" id="stat-avg">0</span>
      </div>
      <div class="stat">
        <span class="label">Avg minutes/day</span>
        <span class="value" id="stat-hours">0</span>
      </div>
    </section>

    <table>
      <thead>
        <tr>
          <th>Date</th>
          <th>Candles</th>
          <th>vs. prev day</th>
          <th>Seasonal</th>
          <th>Online</th>
          <th>Minutes</th>
          <th>Notes</th>
        </tr>
      </thead>
      <tbody id="records"></tbody>
    </table>

    <div class="status" id="status"></div>
  </main>

  <script>
    const clientsEl = document.getElementById('clients');
    const recordsEl = document.getElementById('records');
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const api = async (path) => {
      const res = await fetch(path);
      const body = await res.json();
      if (!res.ok || !body.success) {
        throw new Error(body.error || 'Request failed');
      }
      return body.data;
    };

    const deltaClass = (comparison) => {
      if (comparison.startsWith('+')) return 'delta-up';
      if (comparison.startsWith('-')) return 'delta-down';
      return '';
    };

    const renderStats = (stats) => {
      document.getElementById('stat-records').textContent = stats.totalRecords;
      document.getElementById('stat-candles').textContent = stats.totalCandles;
      document.getElementById('stat-seasonal').textContent = stats.totalSeasonalCandles;
      document.getElementById('stat-avg').textContent = stats.avgCandles;
      document.getElementById('stat-hours').textContent = stats.avgHours;
    };

    const renderRecords = (records) => {
      recordsEl.innerHTML = '';
      for (const record of records) {
        const row = document.createElement('tr');
        const cells = [
          record.date,
          String(record.regular_candles),
          record.regular_candles_comparison,
          String(record.seasonal_candles),
          record.online_time || '',
          record.actual_duration == null ? '' : String(record.actual_duration),
          record.notes
        ];
        cells.forEach((text, index) => {
          const cell = document.createElement('td');
          cell.textContent = text;
          if (index === 2) {
            cell.className = deltaClass(text);
          }
          row.appendChild(cell);
        });
        recordsEl.appendChild(row);
      }
    };

    const selectClient = async (client) => {
      for (const chip of clientsEl.children) {
        chip.classList.toggle('active', chip.dataset.id === client.id);
      }
      setStatus('Loading...');
      try {
        const [records, stats] = await Promise.all([
          api(`/api/clients/${client.id}/records`),
          api(`/api/clients/${client.id}/stats`)
        ]);
        renderRecords(records);
        renderStats(stats);
        setStatus('');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const loadClients = async () => {
      const clients = await api('/api/clients');
      clientsEl.innerHTML = '';
      for (const client of clients) {
        const chip = document.createElement('button');
        chip.className = 'client-chip';
        chip.dataset.id = client.id;
        chip.textContent = `${client.avatar} ${client.name}`;
        chip.addEventListener('click', () => selectClient(client));
        clientsEl.appendChild(chip);
      }
      if (clients.length > 0) {
        await selectClient(clients[0]);
      }
    };

    loadClients().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
